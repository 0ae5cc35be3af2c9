pub mod clauses;
pub mod column;
pub mod expr;
pub mod identifier;
pub mod schema_objects;
pub mod select_parts;
pub mod stmt;
pub mod value;
pub mod window;

pub use self::clauses::{
    Assignment, CommonTableExpression, NullsOrder, OrderingTerm, Pragma, QualifiedTable,
    TableIndex, UpsertClause, WithClause,
};
pub use self::column::{Column, Schema};
pub use self::expr::{
    BinaryOperator, BindParameter, Expression, ExpressionOperable, FunctionArgs, InSet,
    OverClause, RaiseFunction, UnaryOperator,
};
pub use self::identifier::{Identifier, NodeKind, kind_of};
pub use self::schema_objects::{
    ColumnConstraint, ColumnDef, ColumnType, Conflict, ForeignKeyAction, ForeignKeyClause,
    IndexedColumn, Initially, Order, TableConstraint,
};
pub use self::select_parts::{
    CompoundOperator, JoinClause, JoinConstraint, JoinOperator, ResultColumn, SelectCore,
    TableOrSubquery,
};
pub use self::stmt::{
    Statement, StatementAlterTable, StatementAnalyze, StatementAttach, StatementBegin,
    StatementCommit, StatementCreateIndex, StatementCreateTable, StatementCreateTrigger,
    StatementCreateView, StatementCreateVirtualTable, StatementDelete, StatementDetach,
    StatementDropIndex, StatementDropTable, StatementDropTrigger, StatementDropView,
    StatementExplain, StatementInsert, StatementPragma, StatementReindex, StatementRelease,
    StatementRollback, StatementSavepoint, StatementSelect, StatementUpdate, StatementVacuum,
    TransactionMode, TriggerEvent, TriggerStep, TriggerTiming,
};
pub use self::value::Value;
pub use self::window::{FilterClause, FrameBound, FrameExclude, FrameSpec, FrameUnits, WindowDef};
