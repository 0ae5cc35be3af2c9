//! The tagged value union.
//!
//! A [`Value`] can appear anywhere SQL accepts a literal or an expression.
//! Overloaded configuration slots (LIMIT count, PRAGMA value, DEFAULT, frame
//! bounds, ...) take `impl Into<Value>` so a plain scalar and a full
//! expression normalize to the same representation and the renderer has one
//! code path.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::{Column, Expression};

/// A literal value or a nested expression. Exactly one tag is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    /// NULL literal
    #[default]
    Null,
    /// Boolean, rendered as the integer literals 1/0
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point
    Double(f64),
    /// Text, quoted and escaped only at render time
    Text(String),
    /// A nested expression node
    Expr(Box<Expression>),
}

impl Identifier for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Int(_) => NodeKind::Int,
            Value::UInt(_) => NodeKind::UInt,
            Value::Double(_) => NodeKind::Double,
            Value::Text(_) => NodeKind::String,
            Value::Expr(_) => NodeKind::Expression,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i64)
            }
        })*
    };
}

macro_rules! value_from_uint {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(n as u64)
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64);
value_from_uint!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Double(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Expression> for Value {
    fn from(e: Expression) -> Self {
        Value::Expr(Box::new(e))
    }
}

impl From<Column> for Value {
    fn from(c: Column) -> Self {
        Value::Expr(Box::new(Expression::Column(c)))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_specific_kinds() {
        assert_eq!(Value::from(1i32).kind(), NodeKind::Int);
        assert_eq!(Value::from(1u32).kind(), NodeKind::UInt);
        assert_eq!(Value::from(1.5).kind(), NodeKind::Double);
        assert_eq!(Value::from("a").kind(), NodeKind::String);
        assert_eq!(Value::from(true).kind(), NodeKind::Bool);
        assert_eq!(Value::Null.kind(), NodeKind::Null);
    }

    #[test]
    fn test_option_normalizes_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
    }
}
