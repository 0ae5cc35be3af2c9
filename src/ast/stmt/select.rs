//! SELECT statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::clauses::{CommonTableExpression, Limit, OrderingTerm, WithClause};
use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::select_parts::{CompoundOperator, ResultColumn, SelectCore, TableOrSubquery};
use crate::ast::window::WindowDef;
use crate::ast::{Expression, Value};

/// `SELECT` / `VALUES`, with optional WITH prefix, compound operators,
/// ORDER BY and LIMIT/OFFSET.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementSelect {
    pub(crate) with: Option<WithClause>,
    pub(crate) core: SelectCore,
    pub(crate) compounds: Vec<(CompoundOperator, SelectCore)>,
    pub(crate) orders: Vec<OrderingTerm>,
    pub(crate) limit: Option<Limit>,
    pub(crate) offset: Option<Value>,
}

impl StatementSelect {
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

    /// Append result columns. An empty collection is a no-op.
    pub fn select<I, R>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ResultColumn>,
    {
        if let SelectCore::Select { columns: slot, .. } = &mut self.core {
            slot.extend(columns.into_iter().map(Into::into));
        }
        self
    }

    /// Append a single result column.
    pub fn result_column(self, column: impl Into<ResultColumn>) -> Self {
        self.select([column.into()])
    }

    pub fn distinct(mut self) -> Self {
        if let SelectCore::Select { distinct, .. } = &mut self.core {
            *distinct = true;
        }
        self
    }

    pub fn from(mut self, table: impl Into<TableOrSubquery>) -> Self {
        if let SelectCore::Select { from, .. } = &mut self.core {
            *from = Some(table.into());
        }
        self
    }

    /// FROM a list of tables (comma-joined).
    pub fn from_tables<I, T>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TableOrSubquery>,
    {
        let list: Vec<TableOrSubquery> = tables.into_iter().map(Into::into).collect();
        if list.is_empty() {
            return self;
        }
        if let SelectCore::Select { from, .. } = &mut self.core {
            *from = Some(TableOrSubquery::List(list));
        }
        self
    }

    /// WHERE condition.
    pub fn filter(mut self, condition: impl Into<Expression>) -> Self {
        if let SelectCore::Select { condition: slot, .. } = &mut self.core {
            *slot = Some(condition.into());
        }
        self
    }

    /// Append GROUP BY expressions. An empty collection is a no-op.
    pub fn group_by<I, E>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        if let SelectCore::Select { group_by, .. } = &mut self.core {
            group_by.extend(exprs.into_iter().map(Into::into));
        }
        self
    }

    pub fn having(mut self, condition: impl Into<Expression>) -> Self {
        if let SelectCore::Select { having, .. } = &mut self.core {
            *having = Some(condition.into());
        }
        self
    }

    /// Declare a named window usable by windowed functions in this statement.
    pub fn window(mut self, name: impl Into<String>, def: WindowDef) -> Self {
        if let SelectCore::Select { windows, .. } = &mut self.core {
            windows.push((name.into(), def));
        }
        self
    }

    /// Replace the core with a VALUES core.
    pub fn values<I, R, V>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.core = SelectCore::values(rows);
        self
    }

    fn compound(mut self, op: CompoundOperator, core: impl Into<SelectCore>) -> Self {
        self.compounds.push((op, core.into()));
        self
    }

    pub fn union(self, core: impl Into<SelectCore>) -> Self {
        self.compound(CompoundOperator::Union, core)
    }

    pub fn union_all(self, core: impl Into<SelectCore>) -> Self {
        self.compound(CompoundOperator::UnionAll, core)
    }

    pub fn intersect(self, core: impl Into<SelectCore>) -> Self {
        self.compound(CompoundOperator::Intersect, core)
    }

    pub fn except(self, core: impl Into<SelectCore>) -> Self {
        self.compound(CompoundOperator::Except, core)
    }

    /// Append one ORDER BY term.
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

impl Identifier for StatementSelect {
    fn kind(&self) -> NodeKind {
        NodeKind::SelectStmt
    }
}

/// A compound operand keeps only the core; ORDER BY and LIMIT apply to the
/// whole compound statement and stay on the outer [`StatementSelect`].
impl From<StatementSelect> for SelectCore {
    fn from(stmt: StatementSelect) -> Self {
        stmt.core
    }
}
