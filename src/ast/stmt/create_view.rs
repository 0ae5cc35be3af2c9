//! CREATE VIEW statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::stmt::StatementSelect;
use crate::ast::{Column, Schema};

/// `CREATE [TEMP] VIEW [IF NOT EXISTS] name [(columns)] AS select`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementCreateView {
    pub(crate) temp: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) schema: Option<Schema>,
    pub(crate) view: Option<String>,
    pub(crate) columns: Vec<Column>,
    pub(crate) select: Option<Box<StatementSelect>>,
}

impl StatementCreateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn temp(mut self) -> Self {
        self.temp = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Append view columns. An empty collection is a no-op.
    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// The defining select. Mandatory for rendering.
    pub fn as_select(mut self, select: StatementSelect) -> Self {
        self.select = Some(Box::new(select));
        self
    }
}

impl Identifier for StatementCreateView {
    fn kind(&self) -> NodeKind {
        NodeKind::CreateViewStmt
    }
}
