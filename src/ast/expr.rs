//! The recursive expression grammar.
//!
//! Literals, column references, bind parameters, unary/binary operators,
//! function calls, CASE, CAST, COLLATE, sub-selects and window invocations.
//! Operator methods live on [`ExpressionOperable`], implemented for both
//! [`Expression`] and [`Column`], so `Column::new("a").gt(1)` builds a tree
//! without an explicit conversion.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::stmt::StatementSelect;
use crate::ast::window::{FilterClause, WindowDef};
use crate::ast::{Column, Schema, Value};
use crate::error::{WinqError, WinqResult};

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negative,
    Positive,
    Not,
    BitwiseInvert,
}

impl UnaryOperator {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Negative => "-",
            UnaryOperator::Positive => "+",
            UnaryOperator::Not => "NOT ",
            UnaryOperator::BitwiseInvert => "~",
        }
    }
}

/// Binary operators, ordered here by grammar role rather than precedence;
/// see [`BinaryOperator::precedence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Concatenate,
    Multiply,
    Divide,
    Modulo,
    Plus,
    Minus,
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
    Is,
    IsNot,
    Like,
    NotLike,
    Glob,
    NotGlob,
    Match,
    NotMatch,
    Regexp,
    NotRegexp,
    And,
    Or,
}

impl BinaryOperator {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Concatenate => "||",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::Less => "<",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Is => "IS",
            BinaryOperator::IsNot => "IS NOT",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::NotLike => "NOT LIKE",
            BinaryOperator::Glob => "GLOB",
            BinaryOperator::NotGlob => "NOT GLOB",
            BinaryOperator::Match => "MATCH",
            BinaryOperator::NotMatch => "NOT MATCH",
            BinaryOperator::Regexp => "REGEXP",
            BinaryOperator::NotRegexp => "NOT REGEXP",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }

    /// SQLite binding strength; higher binds tighter.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Or => 1,
            BinaryOperator::And => 2,
            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::Is
            | BinaryOperator::IsNot
            | BinaryOperator::Like
            | BinaryOperator::NotLike
            | BinaryOperator::Glob
            | BinaryOperator::NotGlob
            | BinaryOperator::Match
            | BinaryOperator::NotMatch
            | BinaryOperator::Regexp
            | BinaryOperator::NotRegexp => 4,
            BinaryOperator::Less
            | BinaryOperator::LessOrEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterOrEqual => 5,
            BinaryOperator::LeftShift
            | BinaryOperator::RightShift
            | BinaryOperator::BitwiseAnd
            | BinaryOperator::BitwiseOr => 7,
            BinaryOperator::Plus | BinaryOperator::Minus => 8,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 9,
            BinaryOperator::Concatenate => 10,
        }
    }
}

/// A bind parameter placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindParameter {
    /// `?`
    Anonymous,
    /// `?N`, N >= 1
    Numbered(u32),
    /// `:name`
    Colon(String),
    /// `@name`
    At(String),
    /// `$name`
    Dollar(String),
}

impl BindParameter {
    /// A numbered placeholder `?N`. Numbering starts at 1.
    pub fn numbered(index: u32) -> WinqResult<Self> {
        if index == 0 {
            return Err(WinqError::invalid_argument(
                "BindParameter",
                "index must be >= 1",
            ));
        }
        Ok(BindParameter::Numbered(index))
    }

    pub fn colon(name: impl Into<String>) -> Self {
        BindParameter::Colon(name.into())
    }

    pub fn at(name: impl Into<String>) -> Self {
        BindParameter::At(name.into())
    }

    pub fn dollar(name: impl Into<String>) -> Self {
        BindParameter::Dollar(name.into())
    }
}

impl Identifier for BindParameter {
    fn kind(&self) -> NodeKind {
        NodeKind::BindParameter
    }
}

/// RAISE function, usable inside trigger bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaiseFunction {
    Ignore,
    Rollback(String),
    Abort(String),
    Fail(String),
}

impl Identifier for RaiseFunction {
    fn kind(&self) -> NodeKind {
        NodeKind::RaiseFunction
    }
}

/// Argument list of a function invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FunctionArgs {
    /// `f(*)`
    Wildcard,
    /// `f(a, b, ...)`; empty means `f()`
    List(Vec<Expression>),
}

/// Right-hand side of an IN expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InSet {
    /// `IN (a, b, ...)`
    List(Vec<Expression>),
    /// `IN (SELECT ...)`
    Select(Box<StatementSelect>),
    /// `IN [schema.]table`
    Table {
        schema: Option<Schema>,
        table: String,
    },
}

/// Window a windowed function is evaluated over: inline definition or a
/// name declared in the statement's WINDOW clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverClause {
    Window(WindowDef),
    Name(String),
}

/// An SQL expression tree.
///
/// `Expression::default()` is [`Expression::Invalid`]: a node with no meaning
/// yet. Rendering a tree that still contains one fails with
/// [`WinqError::InvalidTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Expression {
    #[default]
    Invalid,
    Literal(Value),
    Column(Column),
    BindParameter(BindParameter),
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Between {
        not: bool,
        expr: Box<Expression>,
        lower: Box<Expression>,
        upper: Box<Expression>,
    },
    In {
        not: bool,
        expr: Box<Expression>,
        set: InSet,
    },
    IsNull {
        not: bool,
        expr: Box<Expression>,
    },
    Function {
        name: String,
        distinct: bool,
        args: FunctionArgs,
    },
    Case {
        base: Option<Box<Expression>>,
        branches: Vec<(Expression, Expression)>,
        otherwise: Option<Box<Expression>>,
    },
    Cast {
        expr: Box<Expression>,
        type_name: String,
    },
    Collate {
        expr: Box<Expression>,
        collation: String,
    },
    Exists {
        not: bool,
        select: Box<StatementSelect>,
    },
    /// Parenthesized scalar subquery.
    Select(Box<StatementSelect>),
    Raise(RaiseFunction),
    /// Windowed function invocation: `f(args) [FILTER (...)] OVER ...`.
    Windowed {
        name: String,
        args: FunctionArgs,
        filter: Option<FilterClause>,
        over: OverClause,
    },
}

impl Identifier for Expression {
    fn kind(&self) -> NodeKind {
        match self {
            Expression::Invalid => NodeKind::Invalid,
            Expression::Literal(v) => match v {
                Value::Expr(e) => e.kind(),
                _ => NodeKind::LiteralValue,
            },
            Expression::Column(_) => NodeKind::Column,
            Expression::BindParameter(_) => NodeKind::BindParameter,
            Expression::Raise(_) => NodeKind::RaiseFunction,
            _ => NodeKind::Expression,
        }
    }
}

impl Expression {
    /// A function call expression. The name must be non-empty.
    pub fn function<I, E>(name: impl Into<String>, args: I) -> WinqResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(WinqError::invalid_argument(
                "Expression::function",
                "function name must not be empty",
            ));
        }
        Ok(Expression::Function {
            name,
            distinct: false,
            args: FunctionArgs::List(args.into_iter().map(Into::into).collect()),
        })
    }

    /// `name(DISTINCT args...)`. Requires at least one argument.
    pub fn function_distinct<I, E>(name: impl Into<String>, args: I) -> WinqResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(WinqError::invalid_argument(
                "Expression::function_distinct",
                "function name must not be empty",
            ));
        }
        let args: Vec<Expression> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(WinqError::invalid_argument(
                "Expression::function_distinct",
                "DISTINCT requires at least one argument",
            ));
        }
        Ok(Expression::Function {
            name,
            distinct: true,
            args: FunctionArgs::List(args),
        })
    }

    /// `name(*)`, e.g. `count(*)`.
    pub fn function_all(name: impl Into<String>) -> WinqResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(WinqError::invalid_argument(
                "Expression::function_all",
                "function name must not be empty",
            ));
        }
        Ok(Expression::Function {
            name,
            distinct: false,
            args: FunctionArgs::Wildcard,
        })
    }

    /// A CASE expression with no base operand: `CASE WHEN ... END`.
    pub fn case() -> Self {
        Expression::Case {
            base: None,
            branches: Vec::new(),
            otherwise: None,
        }
    }

    /// A CASE expression with a base operand: `CASE base WHEN ... END`.
    pub fn case_on(base: impl Into<Expression>) -> Self {
        Expression::Case {
            base: Some(Box::new(base.into())),
            branches: Vec::new(),
            otherwise: None,
        }
    }

    /// Append a WHEN/THEN branch. Only meaningful on a CASE expression;
    /// any other variant is returned unchanged.
    pub fn when_then(mut self, when: impl Into<Expression>, then: impl Into<Expression>) -> Self {
        if let Expression::Case { branches, .. } = &mut self {
            branches.push((when.into(), then.into()));
        }
        self
    }

    /// Set the ELSE branch of a CASE expression.
    pub fn otherwise(mut self, value: impl Into<Expression>) -> Self {
        if let Expression::Case {
            otherwise: slot, ..
        } = &mut self
        {
            *slot = Some(Box::new(value.into()));
        }
        self
    }

    /// `EXISTS (SELECT ...)`
    pub fn exists(select: StatementSelect) -> Self {
        Expression::Exists {
            not: false,
            select: Box::new(select),
        }
    }

    /// `NOT EXISTS (SELECT ...)`
    pub fn not_exists(select: StatementSelect) -> Self {
        Expression::Exists {
            not: true,
            select: Box::new(select),
        }
    }

    /// A parenthesized scalar subquery.
    pub fn subquery(select: StatementSelect) -> Self {
        Expression::Select(Box::new(select))
    }

    /// `f(args) [FILTER ...] OVER (window-def)` or `OVER window-name`.
    pub fn windowed(
        name: impl Into<String>,
        args: FunctionArgs,
        filter: Option<FilterClause>,
        over: OverClause,
    ) -> WinqResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(WinqError::invalid_argument(
                "Expression::windowed",
                "function name must not be empty",
            ));
        }
        Ok(Expression::Windowed {
            name,
            args,
            filter,
            over,
        })
    }
}

impl From<Value> for Expression {
    fn from(v: Value) -> Self {
        match v {
            // An expression wrapped in a value unwraps back to itself.
            Value::Expr(e) => *e,
            other => Expression::Literal(other),
        }
    }
}

impl From<Column> for Expression {
    fn from(c: Column) -> Self {
        Expression::Column(c)
    }
}

impl From<BindParameter> for Expression {
    fn from(p: BindParameter) -> Self {
        Expression::BindParameter(p)
    }
}

impl From<RaiseFunction> for Expression {
    fn from(r: RaiseFunction) -> Self {
        Expression::Raise(r)
    }
}

macro_rules! expr_from_scalar {
    ($($t:ty),*) => {
        $(impl From<$t> for Expression {
            fn from(v: $t) -> Self {
                Expression::Literal(Value::from(v))
            }
        })*
    };
}

expr_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, &str, String);

/// Operator surface shared by [`Expression`] and [`Column`].
///
/// Every method consumes `self` and returns a new [`Expression`]; arity is
/// enforced by the signatures (BETWEEN takes exactly two bounds).
pub trait ExpressionOperable: Into<Expression> + Sized {
    fn binary(self, op: BinaryOperator, rhs: impl Into<Expression>) -> Expression {
        Expression::Binary {
            op,
            left: Box::new(self.into()),
            right: Box::new(rhs.into()),
        }
    }

    fn eq(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Equal, rhs)
    }

    fn ne(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::NotEqual, rhs)
    }

    fn lt(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Less, rhs)
    }

    fn le(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::LessOrEqual, rhs)
    }

    fn gt(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Greater, rhs)
    }

    fn ge(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::GreaterOrEqual, rhs)
    }

    fn and(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::And, rhs)
    }

    fn or(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Or, rhs)
    }

    fn add(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Plus, rhs)
    }

    fn sub(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Minus, rhs)
    }

    fn mul(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Multiply, rhs)
    }

    fn div(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Divide, rhs)
    }

    fn modulo(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Modulo, rhs)
    }

    fn concat(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Concatenate, rhs)
    }

    fn bit_and(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::BitwiseAnd, rhs)
    }

    fn bit_or(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::BitwiseOr, rhs)
    }

    fn left_shift(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::LeftShift, rhs)
    }

    fn right_shift(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::RightShift, rhs)
    }

    fn like(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Like, rhs)
    }

    fn not_like(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::NotLike, rhs)
    }

    fn glob(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Glob, rhs)
    }

    fn not_glob(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::NotGlob, rhs)
    }

    fn regexp(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Regexp, rhs)
    }

    fn match_(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Match, rhs)
    }

    fn is(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Is, rhs)
    }

    fn is_not(self, rhs: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::IsNot, rhs)
    }

    fn neg(self) -> Expression {
        Expression::Unary {
            op: UnaryOperator::Negative,
            operand: Box::new(self.into()),
        }
    }

    fn not(self) -> Expression {
        Expression::Unary {
            op: UnaryOperator::Not,
            operand: Box::new(self.into()),
        }
    }

    fn bit_invert(self) -> Expression {
        Expression::Unary {
            op: UnaryOperator::BitwiseInvert,
            operand: Box::new(self.into()),
        }
    }

    fn is_null(self) -> Expression {
        Expression::IsNull {
            not: false,
            expr: Box::new(self.into()),
        }
    }

    fn not_null(self) -> Expression {
        Expression::IsNull {
            not: true,
            expr: Box::new(self.into()),
        }
    }

    /// `expr BETWEEN lower AND upper`. Exactly two bounds by construction.
    fn between(self, lower: impl Into<Expression>, upper: impl Into<Expression>) -> Expression {
        Expression::Between {
            not: false,
            expr: Box::new(self.into()),
            lower: Box::new(lower.into()),
            upper: Box::new(upper.into()),
        }
    }

    fn not_between(self, lower: impl Into<Expression>, upper: impl Into<Expression>) -> Expression {
        Expression::Between {
            not: true,
            expr: Box::new(self.into()),
            lower: Box::new(lower.into()),
            upper: Box::new(upper.into()),
        }
    }

    fn in_list<I, E>(self, values: I) -> Expression
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Expression::In {
            not: false,
            expr: Box::new(self.into()),
            set: InSet::List(values.into_iter().map(Into::into).collect()),
        }
    }

    fn not_in_list<I, E>(self, values: I) -> Expression
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Expression::In {
            not: true,
            expr: Box::new(self.into()),
            set: InSet::List(values.into_iter().map(Into::into).collect()),
        }
    }

    fn in_select(self, select: StatementSelect) -> Expression {
        Expression::In {
            not: false,
            expr: Box::new(self.into()),
            set: InSet::Select(Box::new(select)),
        }
    }

    fn not_in_select(self, select: StatementSelect) -> Expression {
        Expression::In {
            not: true,
            expr: Box::new(self.into()),
            set: InSet::Select(Box::new(select)),
        }
    }

    /// `expr IN table`. Named to stay clear of `Column::in_table`, which
    /// qualifies a column reference instead.
    fn in_table_named(self, table: impl Into<String>) -> Expression {
        Expression::In {
            not: false,
            expr: Box::new(self.into()),
            set: InSet::Table {
                schema: None,
                table: table.into(),
            },
        }
    }

    fn collate(self, collation: impl Into<String>) -> Expression {
        Expression::Collate {
            expr: Box::new(self.into()),
            collation: collation.into(),
        }
    }

    fn cast_as(self, type_name: impl Into<String>) -> Expression {
        Expression::Cast {
            expr: Box::new(self.into()),
            type_name: type_name.into(),
        }
    }
}

impl ExpressionOperable for Expression {}
impl ExpressionOperable for Column {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Expression::default().kind(), NodeKind::Invalid);
    }

    #[test]
    fn test_function_rejects_empty_name() {
        let err = Expression::function("", [Expression::from(1)]).unwrap_err();
        assert!(matches!(err, WinqError::InvalidArgument { .. }));
    }

    #[test]
    fn test_numbered_bind_parameter_starts_at_one() {
        assert!(BindParameter::numbered(0).is_err());
        assert!(BindParameter::numbered(1).is_ok());
    }

    #[test]
    fn test_value_round_trips_through_expression() {
        let e = Expression::from(Column::new("a")).gt(5);
        let v = Value::from(e.clone());
        assert_eq!(Expression::from(v), e);
    }
}
