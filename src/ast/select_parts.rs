//! SELECT building blocks: result columns, table references, joins and
//! select cores.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::stmt::StatementSelect;
use crate::ast::window::WindowDef;
use crate::ast::{Column, Expression, Schema, Value};

/// One entry of the SELECT result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultColumn {
    /// `*`
    All,
    /// `table.*`
    TableAll(String),
    /// `expr [AS alias]`
    Expr {
        expr: Expression,
        alias: Option<String>,
    },
}

impl ResultColumn {
    pub fn expr(expr: impl Into<Expression>) -> Self {
        ResultColumn::Expr {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn alias(self, alias: impl Into<String>) -> Self {
        match self {
            ResultColumn::Expr { expr, .. } => ResultColumn::Expr {
                expr,
                alias: Some(alias.into()),
            },
            other => other,
        }
    }
}

impl Identifier for ResultColumn {
    fn kind(&self) -> NodeKind {
        NodeKind::ResultColumn
    }
}

impl From<Column> for ResultColumn {
    fn from(column: Column) -> Self {
        ResultColumn::expr(column)
    }
}

impl From<Expression> for ResultColumn {
    fn from(expr: Expression) -> Self {
        ResultColumn::expr(expr)
    }
}

impl From<&str> for ResultColumn {
    fn from(name: &str) -> Self {
        if name == "*" {
            ResultColumn::All
        } else {
            ResultColumn::expr(Column::new(name))
        }
    }
}

/// A table-or-subquery reference in a FROM clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableOrSubquery {
    Table {
        schema: Option<Schema>,
        table: String,
        alias: Option<String>,
        index: Option<String>,
        not_indexed: bool,
    },
    /// Table-valued function call.
    Function {
        schema: Option<Schema>,
        name: String,
        args: Vec<Expression>,
        alias: Option<String>,
    },
    /// `(SELECT ...) [AS alias]`
    Select {
        select: Box<StatementSelect>,
        alias: Option<String>,
    },
    /// A parenthesized join clause.
    Join(Box<JoinClause>),
    /// A parenthesized list of table-or-subqueries.
    List(Vec<TableOrSubquery>),
}

impl TableOrSubquery {
    pub fn table(name: impl Into<String>) -> Self {
        TableOrSubquery::Table {
            schema: None,
            table: name.into(),
            alias: None,
            index: None,
            not_indexed: false,
        }
    }

    pub fn function<I, E>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        TableOrSubquery::Function {
            schema: None,
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            alias: None,
        }
    }

    pub fn select(select: StatementSelect) -> Self {
        TableOrSubquery::Select {
            select: Box::new(select),
            alias: None,
        }
    }

    pub fn of(mut self, new_schema: impl Into<Schema>) -> Self {
        match &mut self {
            TableOrSubquery::Table { schema, .. } | TableOrSubquery::Function { schema, .. } => {
                *schema = Some(new_schema.into());
            }
            _ => {}
        }
        self
    }

    pub fn alias(mut self, new_alias: impl Into<String>) -> Self {
        match &mut self {
            TableOrSubquery::Table { alias, .. }
            | TableOrSubquery::Function { alias, .. }
            | TableOrSubquery::Select { alias, .. } => *alias = Some(new_alias.into()),
            _ => {}
        }
        self
    }

    /// `INDEXED BY name`; applies to plain table references only.
    pub fn indexed_by(mut self, name: impl Into<String>) -> Self {
        if let TableOrSubquery::Table {
            index, not_indexed, ..
        } = &mut self
        {
            *index = Some(name.into());
            *not_indexed = false;
        }
        self
    }

    /// `NOT INDEXED`; applies to plain table references only.
    pub fn not_indexed(mut self) -> Self {
        if let TableOrSubquery::Table {
            index, not_indexed, ..
        } = &mut self
        {
            *index = None;
            *not_indexed = true;
        }
        self
    }
}

impl Identifier for TableOrSubquery {
    fn kind(&self) -> NodeKind {
        NodeKind::TableOrSubquery
    }
}

impl From<&str> for TableOrSubquery {
    fn from(name: &str) -> Self {
        TableOrSubquery::table(name)
    }
}

impl From<String> for TableOrSubquery {
    fn from(name: String) -> Self {
        TableOrSubquery::table(name)
    }
}

impl From<StatementSelect> for TableOrSubquery {
    fn from(select: StatementSelect) -> Self {
        TableOrSubquery::select(select)
    }
}

impl From<JoinClause> for TableOrSubquery {
    fn from(join: JoinClause) -> Self {
        TableOrSubquery::Join(Box::new(join))
    }
}

/// Join operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinOperator {
    /// `,` separated cross product
    Comma,
    Join,
    LeftJoin,
    LeftOuterJoin,
    InnerJoin,
    CrossJoin,
}

impl JoinOperator {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            JoinOperator::Comma => ",",
            JoinOperator::Join => "JOIN",
            JoinOperator::LeftJoin => "LEFT JOIN",
            JoinOperator::LeftOuterJoin => "LEFT OUTER JOIN",
            JoinOperator::InnerJoin => "INNER JOIN",
            JoinOperator::CrossJoin => "CROSS JOIN",
        }
    }
}

/// ON / USING constraint of a join step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinConstraint {
    On(Expression),
    Using(Vec<Column>),
}

impl Identifier for JoinConstraint {
    fn kind(&self) -> NodeKind {
        NodeKind::JoinConstraint
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct JoinStep {
    pub(crate) natural: bool,
    pub(crate) op: JoinOperator,
    pub(crate) table: TableOrSubquery,
    pub(crate) constraint: Option<JoinConstraint>,
}

/// A join clause: a base table-or-subquery followed by join steps.
///
/// `on`/`using` attach to the most recent join step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub(crate) base: TableOrSubquery,
    pub(crate) steps: Vec<JoinStep>,
}

impl JoinClause {
    pub fn new(base: impl Into<TableOrSubquery>) -> Self {
        Self {
            base: base.into(),
            steps: Vec::new(),
        }
    }

    fn step(mut self, natural: bool, op: JoinOperator, table: impl Into<TableOrSubquery>) -> Self {
        self.steps.push(JoinStep {
            natural,
            op,
            table: table.into(),
            constraint: None,
        });
        self
    }

    pub fn join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(false, JoinOperator::Join, table)
    }

    pub fn left_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(false, JoinOperator::LeftJoin, table)
    }

    pub fn left_outer_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(false, JoinOperator::LeftOuterJoin, table)
    }

    pub fn inner_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(false, JoinOperator::InnerJoin, table)
    }

    pub fn cross_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(false, JoinOperator::CrossJoin, table)
    }

    pub fn natural_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(true, JoinOperator::Join, table)
    }

    pub fn natural_left_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(true, JoinOperator::LeftJoin, table)
    }

    pub fn natural_inner_join(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(true, JoinOperator::InnerJoin, table)
    }

    /// Comma-join (cartesian product syntax).
    pub fn also(self, table: impl Into<TableOrSubquery>) -> Self {
        self.step(false, JoinOperator::Comma, table)
    }

    /// ON constraint for the most recent join step.
    pub fn on(mut self, condition: impl Into<Expression>) -> Self {
        if let Some(step) = self.steps.last_mut() {
            step.constraint = Some(JoinConstraint::On(condition.into()));
        }
        self
    }

    /// USING constraint for the most recent join step.
    pub fn using<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        if let Some(step) = self.steps.last_mut() {
            step.constraint = Some(JoinConstraint::Using(
                columns.into_iter().map(Into::into).collect(),
            ));
        }
        self
    }
}

impl Identifier for JoinClause {
    fn kind(&self) -> NodeKind {
        NodeKind::JoinClause
    }
}

/// One core of a (possibly compound) SELECT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectCore {
    Select {
        distinct: bool,
        columns: Vec<ResultColumn>,
        from: Option<TableOrSubquery>,
        condition: Option<Expression>,
        group_by: Vec<Expression>,
        having: Option<Expression>,
        windows: Vec<(String, WindowDef)>,
    },
    /// `VALUES (row), (row), ...`
    Values(Vec<Vec<Value>>),
}

impl Default for SelectCore {
    fn default() -> Self {
        SelectCore::Select {
            distinct: false,
            columns: Vec::new(),
            from: None,
            condition: None,
            group_by: Vec::new(),
            having: None,
            windows: Vec::new(),
        }
    }
}

impl SelectCore {
    /// A VALUES core. Each row is one parenthesized value list.
    pub fn values<I, R, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        SelectCore::Values(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl Identifier for SelectCore {
    fn kind(&self) -> NodeKind {
        NodeKind::SelectCore
    }
}

/// Compound SELECT operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundOperator {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl CompoundOperator {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            CompoundOperator::Union => "UNION",
            CompoundOperator::UnionAll => "UNION ALL",
            CompoundOperator::Intersect => "INTERSECT",
            CompoundOperator::Except => "EXCEPT",
        }
    }
}
