//! INSERT statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::clauses::{CommonTableExpression, UpsertClause, WithClause};
use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::schema_objects::Conflict;
use crate::ast::stmt::StatementSelect;
use crate::ast::{Column, Schema, Value};

/// Row source of an INSERT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub(crate) enum InsertSource {
    /// Not configured yet; rendering fails.
    #[default]
    Unset,
    Values(Vec<Vec<Value>>),
    Select(Box<StatementSelect>),
    DefaultValues,
}

/// `INSERT [OR ...] INTO table [(columns)] VALUES ... | select | DEFAULT VALUES`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementInsert {
    pub(crate) with: Option<WithClause>,
    pub(crate) or_conflict: Option<Conflict>,
    pub(crate) schema: Option<Schema>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Vec<Column>,
    pub(crate) source: InsertSource,
    pub(crate) upserts: Vec<UpsertClause>,
}

impl StatementInsert {
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

    pub fn insert_into(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
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

    /// Append target columns. An empty collection is a no-op.
    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append one VALUES row.
    pub fn values<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row: Vec<Value> = row.into_iter().map(Into::into).collect();
        match &mut self.source {
            InsertSource::Values(rows) => rows.push(row),
            _ => self.source = InsertSource::Values(vec![row]),
        }
        self
    }

    /// `INSERT INTO ... select`.
    pub fn select(mut self, select: StatementSelect) -> Self {
        self.source = InsertSource::Select(Box::new(select));
        self
    }

    /// `INSERT INTO ... DEFAULT VALUES`.
    pub fn default_values(mut self) -> Self {
        self.source = InsertSource::DefaultValues;
        self
    }

    /// Append an ON CONFLICT clause. SQLite allows a chain of them.
    pub fn upsert(mut self, clause: UpsertClause) -> Self {
        self.upserts.push(clause);
        self
    }
}

impl Identifier for StatementInsert {
    fn kind(&self) -> NodeKind {
        NodeKind::InsertStmt
    }
}
