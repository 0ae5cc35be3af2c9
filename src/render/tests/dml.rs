//! SELECT/INSERT/UPDATE/DELETE rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::{
    Assignment, Column, CommonTableExpression, Expression, ExpressionOperable, JoinClause,
    OrderingTerm, QualifiedTable, ResultColumn, StatementDelete, StatementInsert, StatementSelect,
    StatementUpdate, TableOrSubquery, UpsertClause, Value,
};
use crate::error::WinqError;
use crate::render::ToSql;

#[test]
fn test_minimal_select() {
    let stmt = StatementSelect::new().select(["*"]).from("testTable");
    assert_eq!(stmt.to_sql().unwrap(), "SELECT * FROM testTable");
}

#[test]
fn test_select_without_result_columns_fails() {
    let err = StatementSelect::new().from("t").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_select_clause_combinations() {
    let stmt = StatementSelect::new()
        .select(["name", "age"])
        .distinct()
        .from("users")
        .filter(Column::new("active").eq(1))
        .group_by([Column::new("dept")])
        .having(Expression::function_all("count").unwrap().gt(3))
        .order_by(OrderingTerm::from("age").desc())
        .limit(10)
        .offset(5);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT DISTINCT name, age FROM users WHERE active = 1 \
         GROUP BY dept HAVING count(*) > 3 ORDER BY age DESC LIMIT 10 OFFSET 5"
    );
}

#[test]
fn test_select_omits_unset_clauses() {
    // Each optional clause appears only when configured.
    let base = StatementSelect::new().select(["a"]).from("t");
    assert_eq!(base.to_sql().unwrap(), "SELECT a FROM t");
    assert_eq!(
        base.clone().filter(Column::new("a").gt(0)).to_sql().unwrap(),
        "SELECT a FROM t WHERE a > 0"
    );
    assert_eq!(
        base.clone().limit(3).to_sql().unwrap(),
        "SELECT a FROM t LIMIT 3"
    );
}

#[test]
fn test_limit_overloads_render_identically() {
    let literal = StatementSelect::new().select(["a"]).from("t").limit(10);
    let wrapped = StatementSelect::new()
        .select(["a"])
        .from("t")
        .limit(Value::from(10));
    assert_eq!(literal.to_sql().unwrap(), wrapped.to_sql().unwrap());

    let expr = StatementSelect::new()
        .select(["a"])
        .from("t")
        .limit(Value::from(Expression::from(crate::ast::BindParameter::Anonymous)));
    assert_eq!(expr.to_sql().unwrap(), "SELECT a FROM t LIMIT ?");
}

#[test]
fn test_limit_range() {
    let stmt = StatementSelect::new().select(["a"]).from("t").limit_range(10, 20);
    assert_eq!(stmt.to_sql().unwrap(), "SELECT a FROM t LIMIT 10, 20");
}

#[test]
fn test_limit_range_rejects_offset() {
    let err = StatementSelect::new()
        .select(["a"])
        .from("t")
        .limit_range(10, 20)
        .offset(5)
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, WinqError::InvalidTree(_)));
}

#[test]
fn test_offset_without_limit_fails() {
    let err = StatementSelect::new()
        .select(["a"])
        .from("t")
        .offset(5)
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, WinqError::InvalidTree(_)));
}

#[test]
fn test_select_with_joins() {
    let join = JoinClause::new("orders")
        .join("users")
        .on(Column::new("user_id")
            .in_table("orders")
            .eq(Column::new("id").in_table("users")));
    let stmt = StatementSelect::new().select(["*"]).from(TableOrSubquery::from(join));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT * FROM orders JOIN users ON orders.user_id = users.id"
    );

    let join = JoinClause::new("a").left_join("b").using(["k"]).cross_join("c");
    let stmt = StatementSelect::new().select(["*"]).from(TableOrSubquery::from(join));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT * FROM a LEFT JOIN b USING(k) CROSS JOIN c"
    );
}

#[test]
fn test_select_from_subquery_and_alias() {
    let inner = StatementSelect::new().select(["id"]).from("t");
    let stmt = StatementSelect::new()
        .select(["*"])
        .from(TableOrSubquery::select(inner).alias("sub"));
    assert_eq!(stmt.to_sql().unwrap(), "SELECT * FROM (SELECT id FROM t) AS sub");

    let stmt = StatementSelect::new()
        .select(["*"])
        .from(TableOrSubquery::table("users").alias("u").indexed_by("idx_users"));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT * FROM users AS u INDEXED BY idx_users"
    );
}

#[test]
fn test_table_all_and_aliased_columns() {
    let stmt = StatementSelect::new()
        .result_column(ResultColumn::TableAll("users".to_string()))
        .result_column(ResultColumn::expr(Column::new("total")).alias("n"))
        .from("users");
    assert_eq!(stmt.to_sql().unwrap(), "SELECT users.*, total AS n FROM users");
}

#[test]
fn test_compound_select() {
    let stmt = StatementSelect::new()
        .select(["a"])
        .from("t1")
        .union(StatementSelect::new().select(["a"]).from("t2"))
        .order_by(OrderingTerm::from("a"));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT a FROM t1 UNION SELECT a FROM t2 ORDER BY a"
    );

    let stmt = StatementSelect::new()
        .select(["a"])
        .from("t1")
        .union_all(StatementSelect::new().select(["a"]).from("t2"))
        .except(StatementSelect::new().select(["a"]).from("t3"));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT a FROM t1 UNION ALL SELECT a FROM t2 EXCEPT SELECT a FROM t3"
    );
}

#[test]
fn test_values_select() {
    let stmt = StatementSelect::new().values([[1, 2], [3, 4]]);
    assert_eq!(stmt.to_sql().unwrap(), "VALUES(1, 2), (3, 4)");
}

#[test]
fn test_with_clause() {
    let cte = CommonTableExpression::new("recent")
        .as_select(StatementSelect::new().select(["*"]).from("events"));
    let stmt = StatementSelect::new().with([cte]).select(["*"]).from("recent");
    assert_eq!(
        stmt.to_sql().unwrap(),
        "WITH recent AS (SELECT * FROM events) SELECT * FROM recent"
    );
}

#[test]
fn test_with_recursive_flag_is_independent_of_cte_list() {
    // Plain with() on an empty collection is a no-op.
    let none = Vec::<CommonTableExpression>::new();
    let stmt = StatementSelect::new().with(none.clone()).select(["a"]).from("t");
    assert_eq!(stmt.to_sql().unwrap(), "SELECT a FROM t");

    // with_recursive() sets the flag even without CTEs.
    let stmt = StatementSelect::new().with_recursive(none).select(["a"]).from("t");
    assert_eq!(stmt.to_sql().unwrap(), "WITH RECURSIVE SELECT a FROM t");
}

#[test]
fn test_named_window() {
    use crate::ast::WindowDef;
    let stmt = StatementSelect::new()
        .select(["x"])
        .from("t")
        .window("w", WindowDef::new().partition_by([Column::new("g")]));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT x FROM t WINDOW w AS (PARTITION BY g)"
    );
}

#[test]
fn test_minimal_insert() {
    let stmt = StatementInsert::new()
        .insert_into("users")
        .columns(["id", "name"])
        .values([Value::from(1), Value::from("alice")]);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "INSERT INTO users(id, name) VALUES(1, 'alice')"
    );
}

#[test]
fn test_insert_variants() {
    let stmt = StatementInsert::new()
        .or_replace()
        .insert_into("users")
        .values([Value::from(1)]);
    assert_eq!(stmt.to_sql().unwrap(), "INSERT OR REPLACE INTO users VALUES(1)");

    let stmt = StatementInsert::new().insert_into("users").default_values();
    assert_eq!(stmt.to_sql().unwrap(), "INSERT INTO users DEFAULT VALUES");

    let stmt = StatementInsert::new()
        .insert_into("archive")
        .select(StatementSelect::new().select(["*"]).from("users"));
    assert_eq!(stmt.to_sql().unwrap(), "INSERT INTO archive SELECT * FROM users");

    let stmt = StatementInsert::new()
        .insert_into("users")
        .of("aux")
        .values([Value::from(1)]);
    assert_eq!(stmt.to_sql().unwrap(), "INSERT INTO aux.users VALUES(1)");
}

#[test]
fn test_insert_multiple_value_rows() {
    let stmt = StatementInsert::new()
        .insert_into("t")
        .values([Value::from(1)])
        .values([Value::from(2)]);
    assert_eq!(stmt.to_sql().unwrap(), "INSERT INTO t VALUES(1), (2)");
}

#[test]
fn test_insert_upsert() {
    let stmt = StatementInsert::new()
        .insert_into("users")
        .columns(["id", "name"])
        .values([Value::from(1), Value::from("alice")])
        .upsert(UpsertClause::new().indexed(["id"]).do_nothing());
    assert_eq!(
        stmt.to_sql().unwrap(),
        "INSERT INTO users(id, name) VALUES(1, 'alice') ON CONFLICT(id) DO NOTHING"
    );

    let stmt = StatementInsert::new()
        .insert_into("users")
        .columns(["id", "name"])
        .values([Value::from(1), Value::from("alice")])
        .upsert(
            UpsertClause::new()
                .indexed(["id"])
                .do_update_set("name", "bob")
                .update_filter(Column::new("name").ne("bob")),
        );
    assert_eq!(
        stmt.to_sql().unwrap(),
        "INSERT INTO users(id, name) VALUES(1, 'alice') \
         ON CONFLICT(id) DO UPDATE SET name = 'bob' WHERE name != 'bob'"
    );
}

#[test]
fn test_insert_requires_table_and_source() {
    let err = StatementInsert::new().values([Value::from(1)]).to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));

    let err = StatementInsert::new().insert_into("t").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_minimal_update() {
    let stmt = StatementUpdate::new().update("users").set("name", "bob");
    assert_eq!(stmt.to_sql().unwrap(), "UPDATE users SET name = 'bob'");
}

#[test]
fn test_update_clause_combinations() {
    let stmt = StatementUpdate::new()
        .or_ignore()
        .update(QualifiedTable::new("users").of("aux"))
        .set("name", "bob")
        .set("age", 30)
        .filter(Column::new("id").eq(1))
        .order_by(OrderingTerm::from("id"))
        .limit(1);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "UPDATE OR IGNORE aux.users SET name = 'bob', age = 30 \
         WHERE id = 1 ORDER BY id LIMIT 1"
    );
}

#[test]
fn test_update_column_list_assignment() {
    let stmt = StatementUpdate::new()
        .update("points")
        .set_columns(["x", "y"], Value::from(Expression::subquery(
            StatementSelect::new().select(["a", "b"]).from("src"),
        )));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "UPDATE points SET (x, y) = (SELECT a, b FROM src)"
    );
}

#[test]
fn test_update_requires_table_and_assignments() {
    let err = StatementUpdate::new().set("a", 1).to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));

    let err = StatementUpdate::new().update("t").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_minimal_delete() {
    let stmt = StatementDelete::new().delete_from("testTable");
    assert_eq!(stmt.to_sql().unwrap(), "DELETE FROM testTable");
}

#[test]
fn test_delete_clause_combinations() {
    let stmt = StatementDelete::new()
        .delete_from(QualifiedTable::new("logs").of("aux"))
        .filter(Column::new("ts").lt(1000))
        .order_by(OrderingTerm::from("ts"))
        .limit(100);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "DELETE FROM aux.logs WHERE ts < 1000 ORDER BY ts LIMIT 100"
    );
}

#[test]
fn test_delete_requires_table() {
    let err = StatementDelete::new()
        .filter(Column::new("id").eq(1))
        .to_sql()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "DELETE statement is missing required FROM clause"
    );
}

#[test]
fn test_assignment_needs_target() {
    let mut stmt = StatementUpdate::new().update("t");
    stmt.assignments.push(Assignment::columns(Vec::<Column>::new(), 1));
    let err = stmt.to_sql().unwrap_err();
    assert!(matches!(err, WinqError::InvalidTree(_)));
}
