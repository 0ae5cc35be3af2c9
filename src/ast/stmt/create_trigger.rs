//! CREATE TRIGGER statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::stmt::{StatementDelete, StatementInsert, StatementSelect, StatementUpdate};
use crate::ast::{Column, Expression, Schema};

/// When the trigger fires relative to the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerTiming {
    Before,
    After,
    InsteadOf,
}

impl TriggerTiming {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            TriggerTiming::Before => "BEFORE",
            TriggerTiming::After => "AFTER",
            TriggerTiming::InsteadOf => "INSTEAD OF",
        }
    }
}

/// The event the trigger reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TriggerEvent {
    Delete,
    Insert,
    /// UPDATE, optionally restricted to specific columns.
    Update(Vec<Column>),
}

/// A statement allowed inside a trigger body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TriggerStep {
    Insert(StatementInsert),
    Update(StatementUpdate),
    Delete(StatementDelete),
    Select(StatementSelect),
}

impl From<StatementInsert> for TriggerStep {
    fn from(s: StatementInsert) -> Self {
        TriggerStep::Insert(s)
    }
}

impl From<StatementUpdate> for TriggerStep {
    fn from(s: StatementUpdate) -> Self {
        TriggerStep::Update(s)
    }
}

impl From<StatementDelete> for TriggerStep {
    fn from(s: StatementDelete) -> Self {
        TriggerStep::Delete(s)
    }
}

impl From<StatementSelect> for TriggerStep {
    fn from(s: StatementSelect) -> Self {
        TriggerStep::Select(s)
    }
}

/// `CREATE [TEMP] TRIGGER [IF NOT EXISTS] name timing event ON table
/// [FOR EACH ROW] [WHEN expr] BEGIN ...; END`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementCreateTrigger {
    pub(crate) temp: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) schema: Option<Schema>,
    pub(crate) trigger: Option<String>,
    pub(crate) timing: Option<TriggerTiming>,
    pub(crate) event: Option<TriggerEvent>,
    pub(crate) table: Option<String>,
    pub(crate) for_each_row: bool,
    pub(crate) when: Option<Expression>,
    pub(crate) body: Vec<TriggerStep>,
}

impl StatementCreateTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
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

    pub fn before(mut self) -> Self {
        self.timing = Some(TriggerTiming::Before);
        self
    }

    pub fn after(mut self) -> Self {
        self.timing = Some(TriggerTiming::After);
        self
    }

    pub fn instead_of(mut self) -> Self {
        self.timing = Some(TriggerTiming::InsteadOf);
        self
    }

    pub fn on_delete(mut self) -> Self {
        self.event = Some(TriggerEvent::Delete);
        self
    }

    pub fn on_insert(mut self) -> Self {
        self.event = Some(TriggerEvent::Insert);
        self
    }

    pub fn on_update(mut self) -> Self {
        self.event = Some(TriggerEvent::Update(Vec::new()));
        self
    }

    /// `UPDATE OF column, ...`.
    pub fn on_update_of<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.event = Some(TriggerEvent::Update(
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn on_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn for_each_row(mut self) -> Self {
        self.for_each_row = true;
        self
    }

    pub fn when(mut self, condition: impl Into<Expression>) -> Self {
        self.when = Some(condition.into());
        self
    }

    /// Append one body statement. At least one is mandatory for rendering.
    pub fn execute(mut self, step: impl Into<TriggerStep>) -> Self {
        self.body.push(step.into());
        self
    }
}

impl Identifier for StatementCreateTrigger {
    fn kind(&self) -> NodeKind {
        NodeKind::CreateTriggerStmt
    }
}
