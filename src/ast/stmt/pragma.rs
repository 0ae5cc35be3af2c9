//! PRAGMA statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::clauses::Pragma;
use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Schema, Value};

/// `PRAGMA [schema.]name [= value | (value)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementPragma {
    pub(crate) schema: Option<Schema>,
    pub(crate) pragma: Option<Pragma>,
    pub(crate) value: Option<Value>,
    /// true renders the call form `(value)`, false the assignment `= value`
    pub(crate) call_form: bool,
}

impl StatementPragma {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pragma(mut self, pragma: impl Into<Pragma>) -> Self {
        self.pragma = Some(pragma.into());
        self
    }

    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// `PRAGMA name = value`, the assignment form.
    pub fn to_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self.call_form = false;
        self
    }

    /// `PRAGMA name(value)`, the call form.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self.call_form = true;
        self
    }

    /// A value-carrying pragma mutates database state.
    pub fn is_write(&self) -> bool {
        self.value.is_some()
    }
}

impl Identifier for StatementPragma {
    fn kind(&self) -> NodeKind {
        NodeKind::PragmaStmt
    }
}
