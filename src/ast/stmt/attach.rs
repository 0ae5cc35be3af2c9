//! ATTACH / DETACH statement builders.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Expression, Schema};

/// `ATTACH expr AS schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementAttach {
    pub(crate) expression: Option<Expression>,
    pub(crate) schema: Option<Schema>,
}

impl StatementAttach {
    pub fn new() -> Self {
        Self::default()
    }

    /// The database to attach, as a filename literal or any expression.
    pub fn attach(mut self, expression: impl Into<Expression>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn as_schema(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Identifier for StatementAttach {
    fn kind(&self) -> NodeKind {
        NodeKind::AttachStmt
    }
}

/// `DETACH schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementDetach {
    pub(crate) schema: Option<Schema>,
}

impl StatementDetach {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detach(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Identifier for StatementDetach {
    fn kind(&self) -> NodeKind {
        NodeKind::DetachStmt
    }
}
