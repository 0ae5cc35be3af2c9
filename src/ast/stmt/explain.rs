//! EXPLAIN statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::stmt::Statement;

/// `EXPLAIN stmt` / `EXPLAIN QUERY PLAN stmt`, for any statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementExplain {
    pub(crate) query_plan: bool,
    pub(crate) statement: Option<Box<Statement>>,
}

impl StatementExplain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn explain(mut self, statement: impl Into<Statement>) -> Self {
        self.query_plan = false;
        self.statement = Some(Box::new(statement.into()));
        self
    }

    pub fn explain_query_plan(mut self, statement: impl Into<Statement>) -> Self {
        self.query_plan = true;
        self.statement = Some(Box::new(statement.into()));
        self
    }
}

impl Identifier for StatementExplain {
    fn kind(&self) -> NodeKind {
        NodeKind::ExplainStmt
    }
}
