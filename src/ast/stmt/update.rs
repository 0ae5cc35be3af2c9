//! UPDATE statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::clauses::{
    Assignment, CommonTableExpression, Limit, OrderingTerm, QualifiedTable, WithClause,
};
use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::schema_objects::Conflict;
use crate::ast::{Column, Expression, Value};

/// `UPDATE [OR ...] table SET ... [WHERE ...] [ORDER BY ... LIMIT ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementUpdate {
    pub(crate) with: Option<WithClause>,
    pub(crate) or_conflict: Option<Conflict>,
    pub(crate) table: Option<QualifiedTable>,
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) condition: Option<Expression>,
    pub(crate) orders: Vec<OrderingTerm>,
    pub(crate) limit: Option<Limit>,
    pub(crate) offset: Option<Value>,
}

impl StatementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach CTEs. An empty collection is a no-op.
    pub fn with<I>(mut self, ctes: I) -> Self
    where
        I: IntoIterator<Item = CommonTableExpression>,
    {
        let mut ctes = ctes.into_iter().peekable();
        if ctes.peek().is_none() {
            return self;
        }
        self.with.get_or_insert_with(WithClause::default).ctes.extend(ctes);
        self
    }

    /// Attach CTEs and flip the recursive flag, even with an empty collection.
    pub fn with_recursive<I>(mut self, ctes: I) -> Self
    where
        I: IntoIterator<Item = CommonTableExpression>,
    {
        let clause = self.with.get_or_insert_with(WithClause::default);
        clause.recursive = true;
        clause.ctes.extend(ctes);
        self
    }

    pub fn update(mut self, table: impl Into<QualifiedTable>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn or_replace(mut self) -> Self {
        self.or_conflict = Some(Conflict::Replace);
        self
    }

    pub fn or_rollback(mut self) -> Self {
        self.or_conflict = Some(Conflict::Rollback);
        self
    }

    pub fn or_abort(mut self) -> Self {
        self.or_conflict = Some(Conflict::Abort);
        self
    }

    pub fn or_fail(mut self) -> Self {
        self.or_conflict = Some(Conflict::Fail);
        self
    }

    pub fn or_ignore(mut self) -> Self {
        self.or_conflict = Some(Conflict::Ignore);
        self
    }

    /// Append one `column = value` assignment.
    pub fn set(mut self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.assignments.push(Assignment::new(column, value));
        self
    }

    /// Append one `(a, b, ...) = value` assignment.
    pub fn set_columns<I, C>(mut self, columns: I, value: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.assignments.push(Assignment::columns(columns, value));
        self
    }

    /// WHERE condition.
    pub fn filter(mut self, condition: impl Into<Expression>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn order_by(mut self, term: impl Into<OrderingTerm>) -> Self {
        self.orders.push(term.into());
        self
    }

    /// Append ORDER BY terms. An empty collection is a no-op.
    pub fn order_by_terms<I, T>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OrderingTerm>,
    {
        self.orders.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn limit(mut self, count: impl Into<Value>) -> Self {
        self.limit = Some(Limit::Count(count.into()));
        self
    }

    pub fn limit_range(mut self, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        self.limit = Some(Limit::Range {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn offset(mut self, offset: impl Into<Value>) -> Self {
        self.offset = Some(offset.into());
        self
    }
}

impl Identifier for StatementUpdate {
    fn kind(&self) -> NodeKind {
        NodeKind::UpdateStmt
    }
}
