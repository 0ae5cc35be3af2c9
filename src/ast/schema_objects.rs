//! Schema definition nodes: column definitions, column and table
//! constraints, foreign-key clauses and indexed columns.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Column, Expression, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// ON CONFLICT resolution for constraints and INSERT/UPDATE OR forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conflict {
    Rollback,
    Abort,
    Fail,
    Ignore,
    Replace,
}

impl Conflict {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Conflict::Rollback => "ROLLBACK",
            Conflict::Abort => "ABORT",
            Conflict::Fail => "FAIL",
            Conflict::Ignore => "IGNORE",
            Conflict::Replace => "REPLACE",
        }
    }
}

/// Column type affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Text,
    Real,
    Blob,
    Numeric,
}

impl ColumnType {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Real => "REAL",
            ColumnType::Blob => "BLOB",
            ColumnType::Numeric => "NUMERIC",
        }
    }
}

/// Foreign-key ON DELETE / ON UPDATE action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForeignKeyAction {
    SetNull,
    SetDefault,
    Cascade,
    Restrict,
    NoAction,
}

impl ForeignKeyAction {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            ForeignKeyAction::SetNull => "SET NULL",
            ForeignKeyAction::SetDefault => "SET DEFAULT",
            ForeignKeyAction::Cascade => "CASCADE",
            ForeignKeyAction::Restrict => "RESTRICT",
            ForeignKeyAction::NoAction => "NO ACTION",
        }
    }
}

/// Deferral timing for a deferrable foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Initially {
    Deferred,
    Immediate,
}

/// `REFERENCES table (...)` with its actions and deferral state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyClause {
    pub(crate) table: String,
    pub(crate) columns: Vec<Column>,
    pub(crate) on_delete: Option<ForeignKeyAction>,
    pub(crate) on_update: Option<ForeignKeyAction>,
    pub(crate) match_name: Option<String>,
    /// `Some(true)` = DEFERRABLE, `Some(false)` = NOT DEFERRABLE
    pub(crate) deferrable: Option<bool>,
    pub(crate) initially: Option<Initially>,
}

impl ForeignKeyClause {
    pub fn references(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            on_delete: None,
            on_update: None,
            match_name: None,
            deferrable: None,
            initially: None,
        }
    }

    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }

    pub fn match_name(mut self, name: impl Into<String>) -> Self {
        self.match_name = Some(name.into());
        self
    }

    pub fn deferrable(mut self) -> Self {
        self.deferrable = Some(true);
        self
    }

    pub fn not_deferrable(mut self) -> Self {
        self.deferrable = Some(false);
        self
    }

    pub fn initially_deferred(mut self) -> Self {
        self.initially = Some(Initially::Deferred);
        self
    }

    pub fn initially_immediate(mut self) -> Self {
        self.initially = Some(Initially::Immediate);
        self
    }
}

impl Identifier for ForeignKeyClause {
    fn kind(&self) -> NodeKind {
        NodeKind::ForeignKeyClause
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum ColumnConstraintKind {
    PrimaryKey {
        order: Option<Order>,
        conflict: Option<Conflict>,
        auto_increment: bool,
    },
    NotNull {
        conflict: Option<Conflict>,
    },
    Unique {
        conflict: Option<Conflict>,
    },
    Check(Expression),
    Default(Value),
    Collate(String),
    ForeignKey(ForeignKeyClause),
    Generated {
        expr: Expression,
        stored: bool,
    },
}

/// A single constraint inside a column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConstraint {
    pub(crate) name: Option<String>,
    pub(crate) kind: ColumnConstraintKind,
}

impl ColumnConstraint {
    pub fn primary_key() -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::PrimaryKey {
                order: None,
                conflict: None,
                auto_increment: false,
            },
        }
    }

    pub fn not_null() -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::NotNull { conflict: None },
        }
    }

    pub fn unique() -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::Unique { conflict: None },
        }
    }

    pub fn check(condition: impl Into<Expression>) -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::Check(condition.into()),
        }
    }

    pub fn default_to(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::Default(value.into()),
        }
    }

    pub fn collate(collation: impl Into<String>) -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::Collate(collation.into()),
        }
    }

    pub fn foreign_key(clause: ForeignKeyClause) -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::ForeignKey(clause),
        }
    }

    /// `GENERATED ALWAYS AS (expr)`, virtual by default.
    pub fn generated_as(expr: impl Into<Expression>) -> Self {
        Self {
            name: None,
            kind: ColumnConstraintKind::Generated {
                expr: expr.into(),
                stored: false,
            },
        }
    }

    /// `CONSTRAINT name ...`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sort order of a PRIMARY KEY constraint; ignored on other kinds.
    pub fn order(mut self, order: Order) -> Self {
        if let ColumnConstraintKind::PrimaryKey { order: slot, .. } = &mut self.kind {
            *slot = Some(order);
        }
        self
    }

    /// AUTOINCREMENT on a PRIMARY KEY constraint; ignored on other kinds.
    pub fn auto_increment(mut self) -> Self {
        if let ColumnConstraintKind::PrimaryKey { auto_increment, .. } = &mut self.kind {
            *auto_increment = true;
        }
        self
    }

    /// ON CONFLICT action for PRIMARY KEY / NOT NULL / UNIQUE constraints.
    pub fn conflict(mut self, conflict: Conflict) -> Self {
        match &mut self.kind {
            ColumnConstraintKind::PrimaryKey { conflict: slot, .. }
            | ColumnConstraintKind::NotNull { conflict: slot }
            | ColumnConstraintKind::Unique { conflict: slot } => *slot = Some(conflict),
            _ => {}
        }
        self
    }

    /// Mark a generated column STORED; ignored on other kinds.
    pub fn stored(mut self) -> Self {
        if let ColumnConstraintKind::Generated { stored, .. } = &mut self.kind {
            *stored = true;
        }
        self
    }
}

impl Identifier for ColumnConstraint {
    fn kind(&self) -> NodeKind {
        NodeKind::ColumnConstraint
    }
}

/// A column definition inside CREATE TABLE or ALTER TABLE ADD COLUMN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub(crate) column: Column,
    pub(crate) column_type: Option<ColumnType>,
    pub(crate) constraints: Vec<ColumnConstraint>,
}

impl ColumnDef {
    pub fn new(column: impl Into<Column>) -> Self {
        Self {
            column: column.into(),
            column_type: None,
            constraints: Vec::new(),
        }
    }

    pub fn with_type(column: impl Into<Column>, column_type: ColumnType) -> Self {
        Self {
            column: column.into(),
            column_type: Some(column_type),
            constraints: Vec::new(),
        }
    }

    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = ColumnConstraint>,
    {
        self.constraints.extend(constraints);
        self
    }
}

impl Identifier for ColumnDef {
    fn kind(&self) -> NodeKind {
        NodeKind::ColumnDef
    }
}

/// The key of an indexed column: a plain column or an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum IndexedColumnKey {
    Column(Column),
    Expr(Expression),
}

/// A column (or expression) inside an index or conflict target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedColumn {
    pub(crate) key: IndexedColumnKey,
    pub(crate) collation: Option<String>,
    pub(crate) order: Option<Order>,
}

impl IndexedColumn {
    pub fn collate(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn asc(mut self) -> Self {
        self.order = Some(Order::Asc);
        self
    }

    pub fn desc(mut self) -> Self {
        self.order = Some(Order::Desc);
        self
    }
}

impl Identifier for IndexedColumn {
    fn kind(&self) -> NodeKind {
        NodeKind::IndexedColumn
    }
}

impl From<Column> for IndexedColumn {
    fn from(column: Column) -> Self {
        Self {
            key: IndexedColumnKey::Column(column),
            collation: None,
            order: None,
        }
    }
}

impl From<&str> for IndexedColumn {
    fn from(name: &str) -> Self {
        Column::new(name).into()
    }
}

impl From<Expression> for IndexedColumn {
    fn from(expr: Expression) -> Self {
        Self {
            key: IndexedColumnKey::Expr(expr),
            collation: None,
            order: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum TableConstraintKind {
    PrimaryKey {
        columns: Vec<IndexedColumn>,
        conflict: Option<Conflict>,
    },
    Unique {
        columns: Vec<IndexedColumn>,
        conflict: Option<Conflict>,
    },
    Check(Expression),
    ForeignKey {
        columns: Vec<Column>,
        clause: ForeignKeyClause,
    },
}

/// A table-level constraint inside CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConstraint {
    pub(crate) name: Option<String>,
    pub(crate) kind: TableConstraintKind,
}

impl TableConstraint {
    pub fn primary_key<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<IndexedColumn>,
    {
        Self {
            name: None,
            kind: TableConstraintKind::PrimaryKey {
                columns: columns.into_iter().map(Into::into).collect(),
                conflict: None,
            },
        }
    }

    pub fn unique<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<IndexedColumn>,
    {
        Self {
            name: None,
            kind: TableConstraintKind::Unique {
                columns: columns.into_iter().map(Into::into).collect(),
                conflict: None,
            },
        }
    }

    pub fn check(condition: impl Into<Expression>) -> Self {
        Self {
            name: None,
            kind: TableConstraintKind::Check(condition.into()),
        }
    }

    pub fn foreign_key<I, C>(columns: I, clause: ForeignKeyClause) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        Self {
            name: None,
            kind: TableConstraintKind::ForeignKey {
                columns: columns.into_iter().map(Into::into).collect(),
                clause,
            },
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn conflict(mut self, conflict: Conflict) -> Self {
        match &mut self.kind {
            TableConstraintKind::PrimaryKey { conflict: slot, .. }
            | TableConstraintKind::Unique { conflict: slot, .. } => *slot = Some(conflict),
            _ => {}
        }
        self
    }
}

impl Identifier for TableConstraint {
    fn kind(&self) -> NodeKind {
        NodeKind::TableConstraint
    }
}
