//! Schema statement rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::{
    Column, ColumnConstraint, ColumnDef, ColumnType, Conflict, Expression, ExpressionOperable,
    ForeignKeyAction, ForeignKeyClause, IndexedColumn, Order, StatementAlterTable,
    StatementCreateIndex, StatementCreateTable, StatementCreateTrigger, StatementCreateView,
    StatementCreateVirtualTable, StatementDelete, StatementDropIndex, StatementDropTable,
    StatementDropTrigger, StatementDropView, StatementSelect, StatementUpdate, TableConstraint,
};
use crate::error::WinqError;
use crate::render::ToSql;

#[test]
fn test_create_table() {
    let stmt = StatementCreateTable::new()
        .create_table("users")
        .define(
            ColumnDef::with_type("id", ColumnType::Integer)
                .constraint(ColumnConstraint::primary_key().auto_increment()),
        )
        .define(ColumnDef::with_type("name", ColumnType::Text).constraint(ColumnConstraint::not_null()));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TABLE users(id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)"
    );
}

#[test]
fn test_create_table_modifiers() {
    let stmt = StatementCreateTable::new()
        .create_table("t")
        .temp()
        .if_not_exists()
        .define(ColumnDef::with_type("k", ColumnType::Text))
        .without_rowid();
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TEMP TABLE IF NOT EXISTS t(k TEXT) WITHOUT ROWID"
    );
}

#[test]
fn test_create_table_column_constraints() {
    let stmt = StatementCreateTable::new()
        .create_table("events")
        .of("aux")
        .define(
            ColumnDef::with_type("id", ColumnType::Integer)
                .constraint(ColumnConstraint::primary_key().order(Order::Desc).conflict(Conflict::Fail)),
        )
        .define(
            ColumnDef::with_type("kind", ColumnType::Text)
                .constraint(ColumnConstraint::default_to("generic"))
                .constraint(ColumnConstraint::collate("NOCASE")),
        )
        .define(
            ColumnDef::with_type("score", ColumnType::Real)
                .constraint(ColumnConstraint::check(Column::new("score").ge(0))),
        );
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TABLE aux.events(\
         id INTEGER PRIMARY KEY DESC ON CONFLICT FAIL, \
         kind TEXT DEFAULT 'generic' COLLATE NOCASE, \
         score REAL CHECK(score >= 0))"
    );
}

#[test]
fn test_create_table_foreign_key_and_generated() {
    let fk = ForeignKeyClause::references("users")
        .column("id")
        .on_delete(ForeignKeyAction::Cascade)
        .deferrable()
        .initially_deferred();
    let stmt = StatementCreateTable::new()
        .create_table("orders")
        .define(
            ColumnDef::with_type("user_id", ColumnType::Integer)
                .constraint(ColumnConstraint::foreign_key(fk)),
        )
        .define(
            ColumnDef::with_type("total2", ColumnType::Real)
                .constraint(ColumnConstraint::generated_as(Column::new("total").mul(2)).stored()),
        );
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TABLE orders(\
         user_id INTEGER REFERENCES users(id) ON DELETE CASCADE DEFERRABLE INITIALLY DEFERRED, \
         total2 REAL GENERATED ALWAYS AS (total * 2) STORED)"
    );
}

#[test]
fn test_create_table_table_constraints() {
    let stmt = StatementCreateTable::new()
        .create_table("m")
        .define(ColumnDef::with_type("a", ColumnType::Integer))
        .define(ColumnDef::with_type("b", ColumnType::Integer))
        .constraint(TableConstraint::primary_key(["a", "b"]).named("pk_m"))
        .constraint(TableConstraint::unique([IndexedColumn::from("b").desc()]));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TABLE m(a INTEGER, b INTEGER, \
         CONSTRAINT pk_m PRIMARY KEY(a, b), UNIQUE(b DESC))"
    );
}

#[test]
fn test_create_table_as_select() {
    let stmt = StatementCreateTable::new()
        .create_table("snapshot")
        .as_select(StatementSelect::new().select(["*"]).from("live"));
    assert_eq!(stmt.to_sql().unwrap(), "CREATE TABLE snapshot AS SELECT * FROM live");
}

#[test]
fn test_create_table_requires_name_and_columns() {
    let err = StatementCreateTable::new()
        .define(ColumnDef::new("a"))
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));

    let err = StatementCreateTable::new().create_table("t").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_create_index() {
    let stmt = StatementCreateIndex::new()
        .create_index("idx_users_email")
        .unique()
        .if_not_exists()
        .on("users")
        .indexed(["email"]);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)"
    );
}

#[test]
fn test_create_partial_index_with_expression() {
    let stmt = StatementCreateIndex::new()
        .create_index("idx_lower")
        .on("users")
        .indexed([IndexedColumn::from(
            Expression::function("lower", [Column::new("email")]).unwrap(),
        )])
        .filter(Column::new("active").eq(1));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE INDEX idx_lower ON users(lower(email)) WHERE active = 1"
    );
}

#[test]
fn test_create_index_requires_columns() {
    let err = StatementCreateIndex::new()
        .create_index("i")
        .on("t")
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_create_view() {
    let stmt = StatementCreateView::new()
        .create_view("active_users")
        .as_select(
            StatementSelect::new()
                .select(["*"])
                .from("users")
                .filter(Column::new("active").eq(1)),
        );
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE VIEW active_users AS SELECT * FROM users WHERE active = 1"
    );

    let stmt = StatementCreateView::new()
        .create_view("pairs")
        .temp()
        .columns(["a", "b"])
        .as_select(StatementSelect::new().select(["x", "y"]).from("t"));
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TEMP VIEW pairs(a, b) AS SELECT x, y FROM t"
    );
}

#[test]
fn test_create_view_requires_select() {
    let err = StatementCreateView::new().create_view("v").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_create_trigger() {
    let body = StatementUpdate::new()
        .update("counts")
        .set("n", Column::new("n").add(1));
    let stmt = StatementCreateTrigger::new()
        .create_trigger("trg_count")
        .after()
        .on_insert()
        .on_table("users")
        .for_each_row()
        .execute(body);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TRIGGER trg_count AFTER INSERT ON users FOR EACH ROW \
         BEGIN UPDATE counts SET n = n + 1; END"
    );
}

#[test]
fn test_create_trigger_update_of_and_when() {
    let body = StatementDelete::new().delete_from("audit");
    let stmt = StatementCreateTrigger::new()
        .create_trigger("trg")
        .before()
        .on_update_of(["name", "email"])
        .on_table("users")
        .when(Column::new("old").ne(Column::new("new")))
        .execute(body);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "CREATE TRIGGER trg BEFORE UPDATE OF name, email ON users \
         WHEN old != new BEGIN DELETE FROM audit; END"
    );
}

#[test]
fn test_create_trigger_requires_body() {
    let err = StatementCreateTrigger::new()
        .create_trigger("trg")
        .after()
        .on_insert()
        .on_table("users")
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_create_virtual_table() {
    let stmt = StatementCreateVirtualTable::new()
        .create_virtual_table("docs")
        .using("fts5")
        .arguments(["title", "body"]);
    assert_eq!(stmt.to_sql().unwrap(), "CREATE VIRTUAL TABLE docs USING fts5(title, body)");

    let stmt = StatementCreateVirtualTable::new()
        .create_virtual_table("docs")
        .using("fts5");
    assert_eq!(stmt.to_sql().unwrap(), "CREATE VIRTUAL TABLE docs USING fts5");
}

#[test]
fn test_alter_table_forms() {
    let base = || StatementAlterTable::new().alter_table("users");

    assert_eq!(
        base().rename_to("people").to_sql().unwrap(),
        "ALTER TABLE users RENAME TO people"
    );
    assert_eq!(
        base().rename_column("name", "full_name").to_sql().unwrap(),
        "ALTER TABLE users RENAME COLUMN name TO full_name"
    );
    assert_eq!(
        base()
            .add_column(ColumnDef::with_type("age", ColumnType::Integer))
            .to_sql()
            .unwrap(),
        "ALTER TABLE users ADD COLUMN age INTEGER"
    );
    assert_eq!(
        base().drop_column("age").to_sql().unwrap(),
        "ALTER TABLE users DROP COLUMN age"
    );
}

#[test]
fn test_alter_table_requires_exactly_one_alteration() {
    let err = StatementAlterTable::new().alter_table("users").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));

    // A later call replaces the earlier alteration rather than stacking.
    let stmt = StatementAlterTable::new()
        .alter_table("users")
        .rename_to("people")
        .drop_column("age");
    assert_eq!(stmt.to_sql().unwrap(), "ALTER TABLE users DROP COLUMN age");
}

#[test]
fn test_drop_statements() {
    assert_eq!(
        StatementDropTable::new().drop_table("users").if_exists().to_sql().unwrap(),
        "DROP TABLE IF EXISTS users"
    );
    assert_eq!(
        StatementDropIndex::new().drop_index("idx").of("aux").to_sql().unwrap(),
        "DROP INDEX aux.idx"
    );
    assert_eq!(
        StatementDropView::new().drop_view("v").to_sql().unwrap(),
        "DROP VIEW v"
    );
    assert_eq!(
        StatementDropTrigger::new().drop_trigger("trg").to_sql().unwrap(),
        "DROP TRIGGER trg"
    );
}

#[test]
fn test_drop_requires_name() {
    let err = StatementDropTable::new().to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}
