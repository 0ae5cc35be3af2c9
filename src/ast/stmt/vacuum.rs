//! VACUUM statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Expression, Schema};

/// `VACUUM [schema] [INTO filename]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementVacuum {
    pub(crate) schema: Option<Schema>,
    pub(crate) into: Option<Expression>,
}

impl StatementVacuum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// `VACUUM INTO file`. Takes a filename literal or any expression.
    pub fn into_file(mut self, file: impl Into<Expression>) -> Self {
        self.into = Some(file.into());
        self
    }
}

impl Identifier for StatementVacuum {
    fn kind(&self) -> NodeKind {
        NodeKind::VacuumStmt
    }
}
