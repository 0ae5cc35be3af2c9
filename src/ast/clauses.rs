//! Reusable clause nodes shared across statement kinds.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::schema_objects::{IndexedColumn, Order};
use crate::ast::stmt::StatementSelect;
use crate::ast::{Column, Expression, Schema, Value};

/// NULLS FIRST / NULLS LAST placement for an ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullsOrder {
    First,
    Last,
}

/// A single ORDER BY term: expression, optional collation, direction,
/// NULLS placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderingTerm {
    pub(crate) expr: Expression,
    pub(crate) collation: Option<String>,
    pub(crate) order: Option<Order>,
    pub(crate) nulls: Option<NullsOrder>,
}

impl OrderingTerm {
    pub fn new(expr: impl Into<Expression>) -> Self {
        Self {
            expr: expr.into(),
            collation: None,
            order: None,
            nulls: None,
        }
    }

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

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }
}

impl Identifier for OrderingTerm {
    fn kind(&self) -> NodeKind {
        NodeKind::OrderingTerm
    }
}

impl From<Column> for OrderingTerm {
    fn from(column: Column) -> Self {
        OrderingTerm::new(column)
    }
}

impl From<Expression> for OrderingTerm {
    fn from(expr: Expression) -> Self {
        OrderingTerm::new(expr)
    }
}

impl From<&str> for OrderingTerm {
    fn from(name: &str) -> Self {
        OrderingTerm::new(Column::new(name))
    }
}

/// How a qualified table forces or forbids index use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableIndex {
    IndexedBy(String),
    NotIndexed,
}

/// Target table of UPDATE/DELETE: `[schema.]table [AS alias]
/// [INDEXED BY idx | NOT INDEXED]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedTable {
    pub(crate) schema: Option<Schema>,
    pub(crate) table: String,
    pub(crate) alias: Option<String>,
    pub(crate) index: Option<TableIndex>,
}

impl QualifiedTable {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
            alias: None,
            index: None,
        }
    }

    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn indexed_by(mut self, index: impl Into<String>) -> Self {
        self.index = Some(TableIndex::IndexedBy(index.into()));
        self
    }

    pub fn not_indexed(mut self) -> Self {
        self.index = Some(TableIndex::NotIndexed);
        self
    }
}

impl Identifier for QualifiedTable {
    fn kind(&self) -> NodeKind {
        NodeKind::QualifiedTableName
    }
}

impl From<&str> for QualifiedTable {
    fn from(table: &str) -> Self {
        QualifiedTable::new(table)
    }
}

impl From<String> for QualifiedTable {
    fn from(table: String) -> Self {
        QualifiedTable::new(table)
    }
}

/// A named subquery attachable via WITH: `name [(columns)] AS (select)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonTableExpression {
    pub(crate) table: String,
    pub(crate) columns: Vec<Column>,
    pub(crate) select: Option<Box<StatementSelect>>,
}

impl CommonTableExpression {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            select: None,
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

    pub fn as_select(mut self, select: StatementSelect) -> Self {
        self.select = Some(Box::new(select));
        self
    }
}

impl Identifier for CommonTableExpression {
    fn kind(&self) -> NodeKind {
        NodeKind::CommonTableExpression
    }
}

/// WITH / WITH RECURSIVE prefix shared by SELECT/INSERT/UPDATE/DELETE.
///
/// The recursive flag and the CTE list are independent: a recursive flag
/// with no CTEs renders `WITH RECURSIVE` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WithClause {
    pub(crate) recursive: bool,
    pub(crate) ctes: Vec<CommonTableExpression>,
}

/// One SET assignment: `column = value` or `(a, b) = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub(crate) columns: Vec<Column>,
    pub(crate) value: Value,
}

impl Assignment {
    pub fn new(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self {
            columns: vec![column.into()],
            value: value.into(),
        }
    }

    pub fn columns<I, C>(columns: I, value: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            value: value.into(),
        }
    }
}

/// What an upsert does when the conflict fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub(crate) enum UpsertAction {
    #[default]
    Nothing,
    Update {
        assignments: Vec<Assignment>,
        condition: Option<Expression>,
    },
}

/// `ON CONFLICT [(target) [WHERE ...]] DO NOTHING | DO UPDATE SET ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpsertClause {
    pub(crate) targets: Vec<IndexedColumn>,
    pub(crate) target_condition: Option<Expression>,
    pub(crate) action: UpsertAction,
}

impl UpsertClause {
    /// `ON CONFLICT DO NOTHING` until configured further.
    pub fn new() -> Self {
        Self::default()
    }

    /// Conflict target columns.
    pub fn indexed<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<IndexedColumn>,
    {
        self.targets.extend(columns.into_iter().map(Into::into));
        self
    }

    /// WHERE on the conflict target (partial-index targets).
    pub fn target_filter(mut self, condition: impl Into<Expression>) -> Self {
        self.target_condition = Some(condition.into());
        self
    }

    pub fn do_nothing(mut self) -> Self {
        self.action = UpsertAction::Nothing;
        self
    }

    /// Switch to DO UPDATE and append one SET assignment.
    pub fn do_update_set(mut self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        let assignment = Assignment::new(column, value);
        match &mut self.action {
            UpsertAction::Update { assignments, .. } => assignments.push(assignment),
            UpsertAction::Nothing => {
                self.action = UpsertAction::Update {
                    assignments: vec![assignment],
                    condition: None,
                };
            }
        }
        self
    }

    /// WHERE on the DO UPDATE branch. No-op while the action is DO NOTHING.
    pub fn update_filter(mut self, condition: impl Into<Expression>) -> Self {
        if let UpsertAction::Update {
            condition: slot, ..
        } = &mut self.action
        {
            *slot = Some(condition.into());
        }
        self
    }
}

impl Identifier for UpsertClause {
    fn kind(&self) -> NodeKind {
        NodeKind::UpsertClause
    }
}

/// A pragma name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pragma {
    pub(crate) name: String,
}

impl Pragma {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn user_version() -> Self {
        Self::new("user_version")
    }

    pub fn journal_mode() -> Self {
        Self::new("journal_mode")
    }

    pub fn foreign_keys() -> Self {
        Self::new("foreign_keys")
    }
}

impl Identifier for Pragma {
    fn kind(&self) -> NodeKind {
        NodeKind::Pragma
    }
}

impl From<&str> for Pragma {
    fn from(name: &str) -> Self {
        Pragma::new(name)
    }
}

impl From<String> for Pragma {
    fn from(name: String) -> Self {
        Pragma::new(name)
    }
}

/// LIMIT clause payload: a count or a `from, to` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum Limit {
    Count(Value),
    Range { from: Value, to: Value },
}
