//! Transaction control statement builders.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};

/// BEGIN transaction behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionMode {
    Deferred,
    Immediate,
    Exclusive,
}

impl TransactionMode {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            TransactionMode::Deferred => "DEFERRED",
            TransactionMode::Immediate => "IMMEDIATE",
            TransactionMode::Exclusive => "EXCLUSIVE",
        }
    }
}

/// `BEGIN [DEFERRED | IMMEDIATE | EXCLUSIVE]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementBegin {
    pub(crate) mode: Option<TransactionMode>,
}

impl StatementBegin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deferred(mut self) -> Self {
        self.mode = Some(TransactionMode::Deferred);
        self
    }

    pub fn immediate(mut self) -> Self {
        self.mode = Some(TransactionMode::Immediate);
        self
    }

    pub fn exclusive(mut self) -> Self {
        self.mode = Some(TransactionMode::Exclusive);
        self
    }
}

impl Identifier for StatementBegin {
    fn kind(&self) -> NodeKind {
        NodeKind::BeginStmt
    }
}

/// `COMMIT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementCommit;

impl StatementCommit {
    pub fn new() -> Self {
        Self
    }
}

impl Identifier for StatementCommit {
    fn kind(&self) -> NodeKind {
        NodeKind::CommitStmt
    }
}

/// `ROLLBACK [TO SAVEPOINT name]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementRollback {
    pub(crate) savepoint: Option<String>,
}

impl StatementRollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_savepoint(mut self, name: impl Into<String>) -> Self {
        self.savepoint = Some(name.into());
        self
    }
}

impl Identifier for StatementRollback {
    fn kind(&self) -> NodeKind {
        NodeKind::RollbackStmt
    }
}

/// `SAVEPOINT name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementSavepoint {
    pub(crate) name: Option<String>,
}

impl StatementSavepoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn savepoint(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Identifier for StatementSavepoint {
    fn kind(&self) -> NodeKind {
        NodeKind::SavepointStmt
    }
}

/// `RELEASE SAVEPOINT name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementRelease {
    pub(crate) name: Option<String>,
}

impl StatementRelease {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Identifier for StatementRelease {
    fn kind(&self) -> NodeKind {
        NodeKind::ReleaseStmt
    }
}
