//! Statement builders, one module per SQL statement kind, closed over by
//! the [`Statement`] enum.

pub mod alter_table;
pub mod analyze;
pub mod attach;
pub mod create_index;
pub mod create_table;
pub mod create_trigger;
pub mod create_view;
pub mod create_virtual_table;
pub mod delete;
pub mod drop;
pub mod explain;
pub mod insert;
pub mod pragma;
pub mod reindex;
pub mod select;
pub mod transaction;
pub mod update;
pub mod vacuum;

pub use self::alter_table::StatementAlterTable;
pub use self::analyze::StatementAnalyze;
pub use self::attach::{StatementAttach, StatementDetach};
pub use self::create_index::StatementCreateIndex;
pub use self::create_table::StatementCreateTable;
pub use self::create_trigger::{
    StatementCreateTrigger, TriggerEvent, TriggerStep, TriggerTiming,
};
pub use self::create_view::StatementCreateView;
pub use self::create_virtual_table::StatementCreateVirtualTable;
pub use self::delete::StatementDelete;
pub use self::drop::{
    StatementDropIndex, StatementDropTable, StatementDropTrigger, StatementDropView,
};
pub use self::explain::StatementExplain;
pub use self::insert::StatementInsert;
pub use self::pragma::StatementPragma;
pub use self::reindex::StatementReindex;
pub use self::select::StatementSelect;
pub use self::transaction::{
    StatementBegin, StatementCommit, StatementRelease, StatementRollback, StatementSavepoint,
    TransactionMode,
};
pub use self::update::StatementUpdate;
pub use self::vacuum::StatementVacuum;

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};

/// The closed set of SQL statements. Compiler-checked exhaustiveness replaces
/// an open inheritance hierarchy: rendering, kind and write classification
/// all dispatch on this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    AlterTable(StatementAlterTable),
    Analyze(StatementAnalyze),
    Attach(StatementAttach),
    Begin(StatementBegin),
    Commit(StatementCommit),
    Rollback(StatementRollback),
    Savepoint(StatementSavepoint),
    Release(StatementRelease),
    CreateIndex(StatementCreateIndex),
    CreateTable(StatementCreateTable),
    CreateTrigger(StatementCreateTrigger),
    Select(StatementSelect),
    Insert(StatementInsert),
    Delete(StatementDelete),
    Update(StatementUpdate),
    CreateView(StatementCreateView),
    CreateVirtualTable(StatementCreateVirtualTable),
    Detach(StatementDetach),
    DropIndex(StatementDropIndex),
    DropTable(StatementDropTable),
    DropTrigger(StatementDropTrigger),
    DropView(StatementDropView),
    Pragma(StatementPragma),
    Reindex(StatementReindex),
    Vacuum(StatementVacuum),
    Explain(StatementExplain),
}

impl Statement {
    /// Whether executing this statement can mutate the database. Callers use
    /// this to route a statement to a write-capable connection without
    /// inspecting its concrete kind.
    pub fn is_write(&self) -> bool {
        match self {
            Statement::Select(_)
            | Statement::Begin(_)
            | Statement::Commit(_)
            | Statement::Rollback(_)
            | Statement::Savepoint(_)
            | Statement::Release(_) => false,
            Statement::Pragma(p) => p.is_write(),
            Statement::Explain(e) => e
                .statement
                .as_ref()
                .map(|s| s.is_write())
                .unwrap_or(false),
            _ => true,
        }
    }
}

impl Identifier for Statement {
    fn kind(&self) -> NodeKind {
        match self {
            Statement::AlterTable(s) => s.kind(),
            Statement::Analyze(s) => s.kind(),
            Statement::Attach(s) => s.kind(),
            Statement::Begin(s) => s.kind(),
            Statement::Commit(s) => s.kind(),
            Statement::Rollback(s) => s.kind(),
            Statement::Savepoint(s) => s.kind(),
            Statement::Release(s) => s.kind(),
            Statement::CreateIndex(s) => s.kind(),
            Statement::CreateTable(s) => s.kind(),
            Statement::CreateTrigger(s) => s.kind(),
            Statement::Select(s) => s.kind(),
            Statement::Insert(s) => s.kind(),
            Statement::Delete(s) => s.kind(),
            Statement::Update(s) => s.kind(),
            Statement::CreateView(s) => s.kind(),
            Statement::CreateVirtualTable(s) => s.kind(),
            Statement::Detach(s) => s.kind(),
            Statement::DropIndex(s) => s.kind(),
            Statement::DropTable(s) => s.kind(),
            Statement::DropTrigger(s) => s.kind(),
            Statement::DropView(s) => s.kind(),
            Statement::Pragma(s) => s.kind(),
            Statement::Reindex(s) => s.kind(),
            Statement::Vacuum(s) => s.kind(),
            Statement::Explain(s) => s.kind(),
        }
    }
}

macro_rules! statement_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl From<$ty> for Statement {
            fn from(s: $ty) -> Self {
                Statement::$variant(s)
            }
        })*
    };
}

statement_from! {
    AlterTable => StatementAlterTable,
    Analyze => StatementAnalyze,
    Attach => StatementAttach,
    Begin => StatementBegin,
    Commit => StatementCommit,
    Rollback => StatementRollback,
    Savepoint => StatementSavepoint,
    Release => StatementRelease,
    CreateIndex => StatementCreateIndex,
    CreateTable => StatementCreateTable,
    CreateTrigger => StatementCreateTrigger,
    Select => StatementSelect,
    Insert => StatementInsert,
    Delete => StatementDelete,
    Update => StatementUpdate,
    CreateView => StatementCreateView,
    CreateVirtualTable => StatementCreateVirtualTable,
    Detach => StatementDetach,
    DropIndex => StatementDropIndex,
    DropTable => StatementDropTable,
    DropTrigger => StatementDropTrigger,
    DropView => StatementDropView,
    Pragma => StatementPragma,
    Reindex => StatementReindex,
    Vacuum => StatementVacuum,
    Explain => StatementExplain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Column;
    use crate::ast::expr::ExpressionOperable;

    #[test]
    fn test_statement_kinds() {
        assert_eq!(
            Statement::from(StatementDelete::new()).kind(),
            NodeKind::DeleteStmt
        );
        assert_eq!(
            Statement::from(StatementAnalyze::new()).kind(),
            NodeKind::AnalyzeStmt
        );
    }

    #[test]
    fn test_write_classification() {
        assert!(Statement::from(StatementDelete::new().delete_from("t")).is_write());
        assert!(Statement::from(StatementCreateTable::new()).is_write());
        assert!(!Statement::from(StatementSelect::new()).is_write());
        assert!(!Statement::from(StatementBegin::new()).is_write());

        // PRAGMA is a write only in its assignment form.
        assert!(!Statement::from(StatementPragma::new().pragma("user_version")).is_write());
        assert!(
            Statement::from(StatementPragma::new().pragma("user_version").to_value(7)).is_write()
        );
    }

    #[test]
    fn test_explain_delegates_write() {
        let select = StatementSelect::new()
            .select(["*"])
            .from("t")
            .filter(Column::new("id").eq(1));
        assert!(!Statement::from(StatementExplain::new().explain(select)).is_write());

        let delete = StatementDelete::new().delete_from("t");
        assert!(Statement::from(StatementExplain::new().explain(delete)).is_write());
    }
}
