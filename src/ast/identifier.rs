//! Node discriminants.
//!
//! Every AST node reports a single [`NodeKind`] from a closed enumeration.
//! The kind never changes after construction; it determines where a node may
//! be embedded and how the renderer dispatches on it.

use serde::{Deserialize, Serialize};

/// The closed set of grammar roles a node can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// The default for a node with no more specific meaning. Must never reach
    /// the renderer inside a fully-built tree.
    Invalid,
    /// Pseudo-kind for an absent optional child. See [`kind_of`].
    Null,
    Bool,
    Int,
    UInt,
    Double,
    String,

    Column,
    Schema,
    ColumnDef,
    ColumnConstraint,
    Expression,
    LiteralValue,
    ForeignKeyClause,
    BindParameter,
    RaiseFunction,
    WindowDef,
    Filter,
    IndexedColumn,
    TableConstraint,
    CommonTableExpression,
    QualifiedTableName,
    OrderingTerm,
    UpsertClause,
    Pragma,
    JoinClause,
    TableOrSubquery,
    JoinConstraint,
    SelectCore,
    ResultColumn,
    FrameSpec,

    AlterTableStmt,
    AnalyzeStmt,
    AttachStmt,
    BeginStmt,
    CommitStmt,
    RollbackStmt,
    SavepointStmt,
    ReleaseStmt,
    CreateIndexStmt,
    CreateTableStmt,
    CreateTriggerStmt,
    SelectStmt,
    InsertStmt,
    DeleteStmt,
    UpdateStmt,
    CreateViewStmt,
    CreateVirtualTableStmt,
    DetachStmt,
    DropIndexStmt,
    DropTableStmt,
    DropTriggerStmt,
    DropViewStmt,
    PragmaStmt,
    ReindexStmt,
    VacuumStmt,
    ExplainStmt,
}

/// Uniform discriminant access for every AST node.
pub trait Identifier {
    /// The grammar role of this node.
    fn kind(&self) -> NodeKind;
}

/// Discriminant of an optional child: [`NodeKind::Null`] when absent.
pub fn kind_of<T: Identifier>(node: Option<&T>) -> NodeKind {
    node.map(Identifier::kind).unwrap_or(NodeKind::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Column;

    #[test]
    fn test_kind_of_absent_child() {
        let col = Column::new("id");
        assert_eq!(kind_of(Some(&col)), NodeKind::Column);
        assert_eq!(kind_of(None::<&Column>), NodeKind::Null);
    }
}
