//! Rendering of values, bind parameters and the expression grammar.

use crate::ast::expr::{Expression, FunctionArgs, InSet, OverClause};
use crate::ast::{BindParameter, Column, RaiseFunction, Value};
use crate::error::{WinqError, WinqResult};
use crate::render::quote::{escape_identifier, escape_text};
use crate::render::{ToSql, join_sql};

impl ToSql for Value {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            // Keep a decimal point so integral doubles stay REAL literals.
            Value::Double(n) if n.is_finite() && n.fract() == 0.0 => format!("{n:.1}"),
            Value::Double(n) => n.to_string(),
            Value::Text(s) => escape_text(s),
            Value::Expr(e) => e.to_sql()?,
        })
    }
}

impl ToSql for Column {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match &self.table {
            Some(table) => format!(
                "{}.{}",
                escape_identifier(table),
                escape_identifier(&self.name)
            ),
            None => escape_identifier(&self.name),
        })
    }
}

impl ToSql for BindParameter {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            BindParameter::Anonymous => "?".to_string(),
            BindParameter::Numbered(0) => {
                return Err(WinqError::invalid_tree("bind parameter numbered 0"));
            }
            BindParameter::Numbered(n) => format!("?{n}"),
            BindParameter::Colon(name) => format!(":{name}"),
            BindParameter::At(name) => format!("@{name}"),
            BindParameter::Dollar(name) => format!("${name}"),
        })
    }
}

impl ToSql for RaiseFunction {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            RaiseFunction::Ignore => "RAISE(IGNORE)".to_string(),
            RaiseFunction::Rollback(msg) => format!("RAISE(ROLLBACK, {})", escape_text(msg)),
            RaiseFunction::Abort(msg) => format!("RAISE(ABORT, {})", escape_text(msg)),
            RaiseFunction::Fail(msg) => format!("RAISE(FAIL, {})", escape_text(msg)),
        })
    }
}

/// Binding strength of an expression for parenthesization decisions.
/// Atoms (literals, columns, function calls, parenthesized forms) never need
/// wrapping.
fn precedence(expr: &Expression) -> u8 {
    const ATOM: u8 = u8::MAX;
    match expr {
        Expression::Binary { op, .. } => op.precedence(),
        Expression::Unary { op, .. } => match op {
            crate::ast::UnaryOperator::Not => 3,
            _ => 12,
        },
        Expression::Between { .. } | Expression::In { .. } | Expression::IsNull { .. } => 4,
        Expression::Collate { .. } => 11,
        _ => ATOM,
    }
}

/// Render a child, parenthesized when it binds more loosely than `min`.
fn render_operand(expr: &Expression, min: u8) -> WinqResult<String> {
    let sql = expr.to_sql()?;
    if precedence(expr) < min {
        Ok(format!("({sql})"))
    } else {
        Ok(sql)
    }
}

fn render_args(args: &FunctionArgs) -> WinqResult<String> {
    Ok(match args {
        FunctionArgs::Wildcard => "*".to_string(),
        FunctionArgs::List(list) => join_sql(list, ", ")?,
    })
}

impl ToSql for Expression {
    fn to_sql(&self) -> WinqResult<String> {
        match self {
            Expression::Invalid => Err(WinqError::invalid_tree(
                "expression carries the Invalid discriminant",
            )),
            Expression::Literal(v) => v.to_sql(),
            Expression::Column(c) => c.to_sql(),
            Expression::BindParameter(p) => p.to_sql(),
            Expression::Raise(r) => r.to_sql(),
            Expression::Unary { op, operand } => {
                let prec = precedence(self);
                Ok(format!("{}{}", op.symbol(), render_operand(operand, prec)?))
            }
            Expression::Binary { op, left, right } => {
                let prec = op.precedence();
                // Left-associative: an equal-precedence right child keeps
                // its parentheses.
                let lhs = render_operand(left, prec)?;
                let rhs_sql = right.to_sql()?;
                let rhs = if precedence(right) <= prec {
                    format!("({rhs_sql})")
                } else {
                    rhs_sql
                };
                Ok(format!("{lhs} {} {rhs}", op.symbol()))
            }
            Expression::Between {
                not,
                expr,
                lower,
                upper,
            } => {
                let keyword = if *not { "NOT BETWEEN" } else { "BETWEEN" };
                Ok(format!(
                    "{} {keyword} {} AND {}",
                    render_operand(expr, 5)?,
                    render_operand(lower, 5)?,
                    render_operand(upper, 5)?
                ))
            }
            Expression::In { not, expr, set } => {
                let keyword = if *not { "NOT IN" } else { "IN" };
                let rhs = match set {
                    InSet::List(list) => format!("({})", join_sql(list, ", ")?),
                    InSet::Select(select) => format!("({})", select.to_sql()?),
                    InSet::Table { schema, table } => match schema {
                        Some(s) => format!(
                            "{}.{}",
                            escape_identifier(&s.name),
                            escape_identifier(table)
                        ),
                        None => escape_identifier(table),
                    },
                };
                Ok(format!("{} {keyword} {rhs}", render_operand(expr, 5)?))
            }
            Expression::IsNull { not, expr } => {
                let keyword = if *not { "IS NOT NULL" } else { "IS NULL" };
                Ok(format!("{} {keyword}", render_operand(expr, 5)?))
            }
            Expression::Function {
                name,
                distinct,
                args,
            } => {
                if *distinct {
                    Ok(format!("{name}(DISTINCT {})", render_args(args)?))
                } else {
                    Ok(format!("{name}({})", render_args(args)?))
                }
            }
            Expression::Case {
                base,
                branches,
                otherwise,
            } => {
                if branches.is_empty() {
                    return Err(WinqError::invalid_tree(
                        "CASE expression has no WHEN branch",
                    ));
                }
                let mut sql = String::from("CASE");
                if let Some(base) = base {
                    sql.push(' ');
                    sql.push_str(&base.to_sql()?);
                }
                for (when, then) in branches {
                    sql.push_str(" WHEN ");
                    sql.push_str(&when.to_sql()?);
                    sql.push_str(" THEN ");
                    sql.push_str(&then.to_sql()?);
                }
                if let Some(otherwise) = otherwise {
                    sql.push_str(" ELSE ");
                    sql.push_str(&otherwise.to_sql()?);
                }
                sql.push_str(" END");
                Ok(sql)
            }
            Expression::Cast { expr, type_name } => {
                Ok(format!("CAST({} AS {type_name})", expr.to_sql()?))
            }
            Expression::Collate { expr, collation } => {
                Ok(format!("{} COLLATE {collation}", render_operand(expr, 11)?))
            }
            Expression::Exists { not, select } => {
                let keyword = if *not { "NOT EXISTS" } else { "EXISTS" };
                Ok(format!("{keyword} ({})", select.to_sql()?))
            }
            Expression::Select(select) => Ok(format!("({})", select.to_sql()?)),
            Expression::Windowed {
                name,
                args,
                filter,
                over,
            } => {
                let mut sql = format!("{name}({})", render_args(args)?);
                if let Some(filter) = filter {
                    sql.push(' ');
                    sql.push_str(&filter.to_sql()?);
                }
                sql.push_str(" OVER ");
                match over {
                    OverClause::Window(def) => sql.push_str(&def.to_sql()?),
                    OverClause::Name(window) => sql.push_str(&escape_identifier(window)),
                }
                Ok(sql)
            }
        }
    }
}
