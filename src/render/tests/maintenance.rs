//! Maintenance, transaction and session statement rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::{
    Pragma, Statement, StatementAnalyze, StatementAttach, StatementBegin, StatementCommit,
    StatementDelete, StatementDetach, StatementExplain, StatementPragma, StatementReindex,
    StatementRelease, StatementRollback, StatementSavepoint, StatementSelect, StatementVacuum,
};
use crate::error::WinqError;
use crate::render::ToSql;

#[test]
fn test_analyze_forms() {
    assert_eq!(StatementAnalyze::new().to_sql().unwrap(), "ANALYZE");
    assert_eq!(
        StatementAnalyze::new().schema("main").to_sql().unwrap(),
        "ANALYZE main"
    );
    assert_eq!(
        StatementAnalyze::new().table("testTable").to_sql().unwrap(),
        "ANALYZE testTable"
    );
    assert_eq!(
        StatementAnalyze::new()
            .schema("testSchema")
            .table("testTable")
            .to_sql()
            .unwrap(),
        "ANALYZE testSchema.testTable"
    );
    assert_eq!(
        StatementAnalyze::new().index("testIndex").to_sql().unwrap(),
        "ANALYZE testIndex"
    );
}

#[test]
fn test_reindex_forms() {
    assert_eq!(StatementReindex::new().to_sql().unwrap(), "REINDEX");
    assert_eq!(
        StatementReindex::new().table("testTable").to_sql().unwrap(),
        "REINDEX testTable"
    );
    assert_eq!(
        StatementReindex::new()
            .table("testTable")
            .of("testSchema")
            .to_sql()
            .unwrap(),
        "REINDEX testSchema.testTable"
    );
    assert_eq!(
        StatementReindex::new().index("testIndex").to_sql().unwrap(),
        "REINDEX testIndex"
    );
    assert_eq!(
        StatementReindex::new().collation("testCollation").to_sql().unwrap(),
        "REINDEX testCollation"
    );
}

#[test]
fn test_reindex_collation_ignores_schema() {
    // Collations cannot be schema-qualified.
    assert_eq!(
        StatementReindex::new()
            .collation("testCollation")
            .of("testSchema")
            .to_sql()
            .unwrap(),
        "REINDEX testCollation"
    );
}

#[test]
fn test_vacuum_forms() {
    assert_eq!(StatementVacuum::new().to_sql().unwrap(), "VACUUM");
    assert_eq!(
        StatementVacuum::new().schema("main").to_sql().unwrap(),
        "VACUUM main"
    );
    assert_eq!(
        StatementVacuum::new().into_file("backup.db").to_sql().unwrap(),
        "VACUUM INTO 'backup.db'"
    );
}

#[test]
fn test_attach_and_detach() {
    let stmt = StatementAttach::new().attach("test.db").as_schema("testSchema");
    assert_eq!(stmt.to_sql().unwrap(), "ATTACH 'test.db' AS testSchema");

    let stmt = StatementDetach::new().detach("testSchema");
    assert_eq!(stmt.to_sql().unwrap(), "DETACH testSchema");
}

#[test]
fn test_attach_requires_both_parts() {
    let err = StatementAttach::new().attach("test.db").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));

    let err = StatementAttach::new().as_schema("s").to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_pragma_forms() {
    assert_eq!(
        StatementPragma::new().pragma(Pragma::user_version()).to_sql().unwrap(),
        "PRAGMA user_version"
    );
    assert_eq!(
        StatementPragma::new()
            .pragma(Pragma::user_version())
            .to_value(7)
            .to_sql()
            .unwrap(),
        "PRAGMA user_version = 7"
    );
    assert_eq!(
        StatementPragma::new()
            .pragma(Pragma::journal_mode())
            .with_value("WAL")
            .to_sql()
            .unwrap(),
        "PRAGMA journal_mode('WAL')"
    );
    assert_eq!(
        StatementPragma::new()
            .pragma("cache_size")
            .of("aux")
            .to_value(-2000)
            .to_sql()
            .unwrap(),
        "PRAGMA aux.cache_size = -2000"
    );
}

#[test]
fn test_transaction_statements() {
    assert_eq!(StatementBegin::new().to_sql().unwrap(), "BEGIN");
    assert_eq!(StatementBegin::new().deferred().to_sql().unwrap(), "BEGIN DEFERRED");
    assert_eq!(StatementBegin::new().immediate().to_sql().unwrap(), "BEGIN IMMEDIATE");
    assert_eq!(StatementBegin::new().exclusive().to_sql().unwrap(), "BEGIN EXCLUSIVE");
    assert_eq!(StatementCommit::new().to_sql().unwrap(), "COMMIT");
    assert_eq!(StatementRollback::new().to_sql().unwrap(), "ROLLBACK");
    assert_eq!(
        StatementRollback::new().to_savepoint("sp").to_sql().unwrap(),
        "ROLLBACK TO SAVEPOINT sp"
    );
    assert_eq!(
        StatementSavepoint::new().savepoint("sp").to_sql().unwrap(),
        "SAVEPOINT sp"
    );
    assert_eq!(
        StatementRelease::new().release("sp").to_sql().unwrap(),
        "RELEASE SAVEPOINT sp"
    );
}

#[test]
fn test_explain_wraps_any_statement() {
    let select = StatementSelect::new().select(["*"]).from("t");
    assert_eq!(
        StatementExplain::new().explain(select.clone()).to_sql().unwrap(),
        "EXPLAIN SELECT * FROM t"
    );
    assert_eq!(
        StatementExplain::new().explain_query_plan(select).to_sql().unwrap(),
        "EXPLAIN QUERY PLAN SELECT * FROM t"
    );

    let delete = StatementDelete::new().delete_from("t");
    assert_eq!(
        StatementExplain::new().explain(delete).to_sql().unwrap(),
        "EXPLAIN DELETE FROM t"
    );
}

#[test]
fn test_explain_requires_inner_statement() {
    let err = StatementExplain::new().to_sql().unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_explain_propagates_inner_errors() {
    // An invalid inner statement fails the whole render.
    let err = StatementExplain::new()
        .explain(StatementDelete::new())
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, WinqError::MissingRequiredClause { .. }));
}

#[test]
fn test_statement_enum_dispatch() {
    let stmt = Statement::from(StatementReindex::new().table("testTable"));
    assert_eq!(stmt.to_sql().unwrap(), "REINDEX testTable");
}
