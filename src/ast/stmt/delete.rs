//! DELETE statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::clauses::{
    CommonTableExpression, Limit, OrderingTerm, QualifiedTable, WithClause,
};
use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Expression, Value};

/// `DELETE FROM table [WHERE ...] [ORDER BY ... LIMIT ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementDelete {
    pub(crate) with: Option<WithClause>,
    pub(crate) table: Option<QualifiedTable>,
    pub(crate) condition: Option<Expression>,
    pub(crate) orders: Vec<OrderingTerm>,
    pub(crate) limit: Option<Limit>,
    pub(crate) offset: Option<Value>,
}

impl StatementDelete {
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

    /// Attach CTEs and flip the recursive flag. The flag is set even when the
    /// collection is empty, rendering `WITH RECURSIVE` with no CTE list.
    pub fn with_recursive<I>(mut self, ctes: I) -> Self
    where
        I: IntoIterator<Item = CommonTableExpression>,
    {
        let clause = self.with.get_or_insert_with(WithClause::default);
        clause.recursive = true;
        clause.ctes.extend(ctes);
        self
    }

    /// Target table. Mandatory for rendering.
    pub fn delete_from(mut self, table: impl Into<QualifiedTable>) -> Self {
        self.table = Some(table.into());
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

    /// `LIMIT count`. Takes a literal integer or any expression.
    pub fn limit(mut self, count: impl Into<Value>) -> Self {
        self.limit = Some(Limit::Count(count.into()));
        self
    }

    /// `LIMIT from, to`.
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

impl Identifier for StatementDelete {
    fn kind(&self) -> NodeKind {
        NodeKind::DeleteStmt
    }
}
