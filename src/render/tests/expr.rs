//! Expression rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::expr::{FunctionArgs, OverClause};
use crate::ast::{
    BindParameter, Column, Expression, ExpressionOperable, FilterClause, FrameBound, FrameSpec,
    FrameUnits, OrderingTerm, RaiseFunction, StatementSelect, Value, WindowDef,
};
use crate::error::WinqError;
use crate::render::ToSql;

fn sql(e: impl Into<Expression>) -> String {
    e.into().to_sql().unwrap()
}

#[test]
fn test_literals() {
    assert_eq!(sql(Expression::Literal(Value::Null)), "NULL");
    assert_eq!(sql(true), "1");
    assert_eq!(sql(false), "0");
    assert_eq!(sql(42), "42");
    assert_eq!(sql(-7i64), "-7");
    assert_eq!(sql(3.5), "3.5");
    // An integral double keeps its decimal point.
    assert_eq!(sql(3.0), "3.0");
    assert_eq!(sql(-2.0f64), "-2.0");
    assert_eq!(sql("it's"), "'it''s'");
}

#[test]
fn test_column_references() {
    assert_eq!(sql(Column::new("name")), "name");
    assert_eq!(sql(Column::new("name").in_table("users")), "users.name");
    assert_eq!(sql(Column::rowid()), "rowid");
    // Reserved words and special characters force quoting.
    assert_eq!(sql(Column::new("order")), "\"order\"");
    assert_eq!(sql(Column::new("has space").in_table("t")), "t.\"has space\"");
}

#[test]
fn test_bind_parameters() {
    assert_eq!(sql(BindParameter::Anonymous), "?");
    assert_eq!(sql(BindParameter::numbered(3).unwrap()), "?3");
    assert_eq!(sql(BindParameter::colon("name")), ":name");
    assert_eq!(sql(BindParameter::at("name")), "@name");
    assert_eq!(sql(BindParameter::dollar("name")), "$name");
}

#[test]
fn test_comparison_operators() {
    let id = || Column::new("id");
    assert_eq!(sql(id().eq(1)), "id = 1");
    assert_eq!(sql(id().ne(1)), "id != 1");
    assert_eq!(sql(id().lt(1)), "id < 1");
    assert_eq!(sql(id().le(1)), "id <= 1");
    assert_eq!(sql(id().gt(1)), "id > 1");
    assert_eq!(sql(id().ge(1)), "id >= 1");
    assert_eq!(sql(id().is(Value::Null)), "id IS NULL");
    assert_eq!(sql(id().is_not(Value::Null)), "id IS NOT NULL");
}

#[test]
fn test_arithmetic_and_string_operators() {
    let a = || Column::new("a");
    assert_eq!(sql(a().add(1)), "a + 1");
    assert_eq!(sql(a().sub(1)), "a - 1");
    assert_eq!(sql(a().mul(2)), "a * 2");
    assert_eq!(sql(a().div(2)), "a / 2");
    assert_eq!(sql(a().modulo(2)), "a % 2");
    assert_eq!(sql(a().concat("suffix")), "a || 'suffix'");
    assert_eq!(sql(a().bit_and(7)), "a & 7");
    assert_eq!(sql(a().bit_or(7)), "a | 7");
    assert_eq!(sql(a().left_shift(2)), "a << 2");
    assert_eq!(sql(a().right_shift(2)), "a >> 2");
}

#[test]
fn test_unary_operators() {
    assert_eq!(sql(Column::new("a").neg()), "-a");
    assert_eq!(sql(Column::new("a").bit_invert()), "~a");
    assert_eq!(sql(Column::new("flag").eq(1).not()), "NOT flag = 1");
    assert_eq!(
        sql(Column::new("a").eq(1).and(Column::new("b").eq(2)).not()),
        "NOT (a = 1 AND b = 2)"
    );
}

#[test]
fn test_logical_precedence() {
    let a = || Column::new("a").eq(1);
    let b = || Column::new("b").eq(2);
    let c = || Column::new("c").eq(3);

    // AND binds tighter than OR: no parentheses needed.
    assert_eq!(sql(a().and(b()).or(c())), "a = 1 AND b = 2 OR c = 3");
    // An OR under an AND keeps its parentheses.
    assert_eq!(sql(a().or(b()).and(c())), "(a = 1 OR b = 2) AND c = 3");
}

#[test]
fn test_arithmetic_precedence() {
    let a = || Column::new("a");
    let b = || Column::new("b");
    let c = || Column::new("c");

    assert_eq!(sql(a().add(b()).mul(c())), "(a + b) * c");
    assert_eq!(sql(a().mul(b()).add(c())), "a * b + c");
    // Left associativity: a - b - c stays flat, a - (b - c) keeps parens.
    assert_eq!(sql(a().sub(b()).sub(c())), "a - b - c");
    assert_eq!(sql(a().sub(b().sub(c()))), "a - (b - c)");
}

#[test]
fn test_pattern_operators() {
    let name = || Column::new("name");
    assert_eq!(sql(name().like("%x%")), "name LIKE '%x%'");
    assert_eq!(sql(name().not_like("%x%")), "name NOT LIKE '%x%'");
    assert_eq!(sql(name().glob("a*")), "name GLOB 'a*'");
    assert_eq!(sql(name().not_glob("a*")), "name NOT GLOB 'a*'");
    assert_eq!(sql(name().regexp("^a")), "name REGEXP '^a'");
    assert_eq!(sql(name().match_("x")), "name MATCH 'x'");
}

#[test]
fn test_null_checks() {
    assert_eq!(sql(Column::new("a").is_null()), "a IS NULL");
    assert_eq!(sql(Column::new("a").not_null()), "a IS NOT NULL");
}

#[test]
fn test_between_and_in() {
    assert_eq!(sql(Column::new("age").between(18, 65)), "age BETWEEN 18 AND 65");
    assert_eq!(
        sql(Column::new("age").not_between(18, 65)),
        "age NOT BETWEEN 18 AND 65"
    );
    assert_eq!(
        sql(Column::new("id").in_list([1, 2, 3])),
        "id IN (1, 2, 3)"
    );
    assert_eq!(
        sql(Column::new("id").not_in_list([1, 2])),
        "id NOT IN (1, 2)"
    );
    assert_eq!(sql(Column::new("id").in_table_named("ids")), "id IN ids");

    let select = StatementSelect::new().select(["id"]).from("banned");
    assert_eq!(
        sql(Column::new("id").in_select(select)),
        "id IN (SELECT id FROM banned)"
    );
}

#[test]
fn test_function_calls() {
    assert_eq!(
        sql(Expression::function("abs", [Column::new("x")]).unwrap()),
        "abs(x)"
    );
    assert_eq!(sql(Expression::function_all("count").unwrap()), "count(*)");
    assert_eq!(
        sql(Expression::function_distinct("count", [Column::new("x")]).unwrap()),
        "count(DISTINCT x)"
    );
    assert_eq!(
        sql(Expression::function("coalesce", [Expression::from(Column::new("a")), Expression::from(0)]).unwrap()),
        "coalesce(a, 0)"
    );
}

#[test]
fn test_case_expressions() {
    let e = Expression::case()
        .when_then(Column::new("a").gt(1), "big")
        .otherwise("small");
    assert_eq!(sql(e), "CASE WHEN a > 1 THEN 'big' ELSE 'small' END");

    let e = Expression::case_on(Column::new("state"))
        .when_then(1, "on")
        .when_then(0, "off");
    assert_eq!(sql(e), "CASE state WHEN 1 THEN 'on' WHEN 0 THEN 'off' END");
}

#[test]
fn test_case_without_branches_is_invalid() {
    let err = Expression::case().to_sql().unwrap_err();
    assert!(matches!(err, WinqError::InvalidTree(_)));
}

#[test]
fn test_cast_and_collate() {
    assert_eq!(sql(Column::new("a").cast_as("INTEGER")), "CAST(a AS INTEGER)");
    assert_eq!(sql(Column::new("name").collate("NOCASE")), "name COLLATE NOCASE");
    assert_eq!(
        sql(Column::new("name").collate("NOCASE").eq("x")),
        "name COLLATE NOCASE = 'x'"
    );
}

#[test]
fn test_exists_and_subquery() {
    let select = || StatementSelect::new().result_column(Expression::from(1)).from("t");
    assert_eq!(sql(Expression::exists(select())), "EXISTS (SELECT 1 FROM t)");
    assert_eq!(
        sql(Expression::not_exists(select())),
        "NOT EXISTS (SELECT 1 FROM t)"
    );
    assert_eq!(sql(Expression::subquery(select())), "(SELECT 1 FROM t)");
}

#[test]
fn test_raise_functions() {
    assert_eq!(sql(RaiseFunction::Ignore), "RAISE(IGNORE)");
    assert_eq!(
        sql(RaiseFunction::Abort("bad row".to_string())),
        "RAISE(ABORT, 'bad row')"
    );
}

#[test]
fn test_windowed_function() {
    let def = WindowDef::new()
        .partition_by([Column::new("dept")])
        .order_by([OrderingTerm::from("salary").desc()]);
    let e = Expression::windowed(
        "row_number",
        FunctionArgs::List(Vec::new()),
        None,
        OverClause::Window(def),
    )
    .unwrap();
    assert_eq!(
        sql(e),
        "row_number() OVER (PARTITION BY dept ORDER BY salary DESC)"
    );

    let e = Expression::windowed(
        "rank",
        FunctionArgs::List(Vec::new()),
        None,
        OverClause::Name("w".to_string()),
    )
    .unwrap();
    assert_eq!(sql(e), "rank() OVER w");
}

#[test]
fn test_windowed_function_with_filter() {
    // The FILTER condition is itself an expression tree.
    let e = Expression::windowed(
        "count",
        FunctionArgs::Wildcard,
        Some(FilterClause::new(Column::new("active").eq(1))),
        OverClause::Name("w".to_string()),
    )
    .unwrap();
    assert_eq!(sql(e), "count(*) FILTER (WHERE active = 1) OVER w");
}

#[test]
fn test_frame_spec() {
    let def = WindowDef::new()
        .order_by([OrderingTerm::from("ts")])
        .frame(FrameSpec::between(
            FrameUnits::Rows,
            FrameBound::Preceding(Value::from(3)),
            FrameBound::CurrentRow,
        ));
    let e = Expression::windowed(
        "sum",
        FunctionArgs::List(vec![Expression::from(Column::new("x"))]),
        None,
        OverClause::Window(def),
    )
    .unwrap();
    assert_eq!(
        sql(e),
        "sum(x) OVER (ORDER BY ts ROWS BETWEEN 3 PRECEDING AND CURRENT ROW)"
    );
}

#[test]
fn test_invalid_node_fails() {
    let err = Expression::default().to_sql().unwrap_err();
    assert!(matches!(err, WinqError::InvalidTree(_)));

    // The error surfaces from any depth, never as partial SQL.
    let err = Column::new("a").eq(Expression::default()).to_sql().unwrap_err();
    assert!(matches!(err, WinqError::InvalidTree(_)));
}

#[test]
fn test_rendering_is_idempotent() {
    let e = Column::new("a").eq(1).and(Column::new("b").is_null());
    let first = e.to_sql().unwrap();
    let second = e.to_sql().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "a = 1 AND b IS NULL");
}
