//! DROP TABLE / INDEX / VIEW / TRIGGER statement builders.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::Schema;

macro_rules! drop_statement {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
        pub struct $name {
            pub(crate) if_exists: bool,
            pub(crate) schema: Option<Schema>,
            pub(crate) name: Option<String>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn $ctor(mut self, name: impl Into<String>) -> Self {
                self.name = Some(name.into());
                self
            }

            pub fn if_exists(mut self) -> Self {
                self.if_exists = true;
                self
            }

            pub fn of(mut self, schema: impl Into<Schema>) -> Self {
                self.schema = Some(schema.into());
                self
            }
        }

        impl Identifier for $name {
            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }
        }
    };
}

drop_statement!(
    /// `DROP TABLE [IF EXISTS] [schema.]table`.
    StatementDropTable,
    drop_table,
    DropTableStmt
);
drop_statement!(
    /// `DROP INDEX [IF EXISTS] [schema.]index`.
    StatementDropIndex,
    drop_index,
    DropIndexStmt
);
drop_statement!(
    /// `DROP VIEW [IF EXISTS] [schema.]view`.
    StatementDropView,
    drop_view,
    DropViewStmt
);
drop_statement!(
    /// `DROP TRIGGER [IF EXISTS] [schema.]trigger`.
    StatementDropTrigger,
    drop_trigger,
    DropTriggerStmt
);
