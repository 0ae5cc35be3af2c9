//! Window definitions, frame specifications and FILTER clauses.

use serde::{Deserialize, Serialize};

use crate::ast::clauses::OrderingTerm;
use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Expression, Value};

/// Frame unit of a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameUnits {
    Range,
    Rows,
    Groups,
}

impl FrameUnits {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            FrameUnits::Range => "RANGE",
            FrameUnits::Rows => "ROWS",
            FrameUnits::Groups => "GROUPS",
        }
    }
}

/// A window frame boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameBound {
    UnboundedPreceding,
    Preceding(Value),
    CurrentRow,
    Following(Value),
    UnboundedFollowing,
}

/// EXCLUDE part of a frame spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameExclude {
    NoOthers,
    CurrentRow,
    Group,
    Ties,
}

impl FrameExclude {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            FrameExclude::NoOthers => "NO OTHERS",
            FrameExclude::CurrentRow => "CURRENT ROW",
            FrameExclude::Group => "GROUP",
            FrameExclude::Ties => "TIES",
        }
    }
}

/// A window frame: units, start (and optional end) bound, optional EXCLUDE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub(crate) units: FrameUnits,
    pub(crate) start: FrameBound,
    pub(crate) end: Option<FrameBound>,
    pub(crate) exclude: Option<FrameExclude>,
}

impl FrameSpec {
    pub fn new(units: FrameUnits, start: FrameBound) -> Self {
        Self {
            units,
            start,
            end: None,
            exclude: None,
        }
    }

    /// `BETWEEN start AND end` form.
    pub fn between(units: FrameUnits, start: FrameBound, end: FrameBound) -> Self {
        Self {
            units,
            start,
            end: Some(end),
            exclude: None,
        }
    }

    pub fn exclude(mut self, exclude: FrameExclude) -> Self {
        self.exclude = Some(exclude);
        self
    }
}

impl Identifier for FrameSpec {
    fn kind(&self) -> NodeKind {
        NodeKind::FrameSpec
    }
}

/// A window definition: `([base] [PARTITION BY ...] [ORDER BY ...] [frame])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WindowDef {
    pub(crate) base: Option<String>,
    pub(crate) partitions: Vec<Expression>,
    pub(crate) orders: Vec<OrderingTerm>,
    pub(crate) frame: Option<FrameSpec>,
}

impl WindowDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inherit from a named window declared earlier in the WINDOW clause.
    pub fn base(mut self, name: impl Into<String>) -> Self {
        self.base = Some(name.into());
        self
    }

    pub fn partition_by<I, E>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        self.partitions.extend(exprs.into_iter().map(Into::into));
        self
    }

    pub fn order_by<I, T>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OrderingTerm>,
    {
        self.orders.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn frame(mut self, frame: FrameSpec) -> Self {
        self.frame = Some(frame);
        self
    }
}

impl Identifier for WindowDef {
    fn kind(&self) -> NodeKind {
        NodeKind::WindowDef
    }
}

/// `FILTER (WHERE condition)` attached to an aggregate or window invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    // Boxed: Expression embeds FilterClause through its windowed variant.
    pub(crate) condition: Box<Expression>,
}

impl FilterClause {
    pub fn new(condition: impl Into<Expression>) -> Self {
        Self {
            condition: Box::new(condition.into()),
        }
    }
}

impl Identifier for FilterClause {
    fn kind(&self) -> NodeKind {
        NodeKind::Filter
    }
}
