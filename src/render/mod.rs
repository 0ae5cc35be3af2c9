//! SQL renderer.
//!
//! Converts AST nodes into SQL text. Rendering is a pure function of the
//! tree: no mutation, deterministic, safe to call repeatedly. A render error
//! never yields partial SQL. Every child render propagates with `?`.

pub(crate) mod clause;
pub(crate) mod ddl;
pub(crate) mod dml;
pub(crate) mod expr;
pub(crate) mod misc;
pub(crate) mod quote;

#[cfg(test)]
mod tests;

use crate::ast::Statement;
use crate::error::WinqResult;

/// Trait for converting AST nodes to SQL text.
pub trait ToSql {
    /// Render this node to its canonical SQL text.
    fn to_sql(&self) -> WinqResult<String>;
}

impl ToSql for Statement {
    fn to_sql(&self) -> WinqResult<String> {
        match self {
            Statement::AlterTable(s) => s.to_sql(),
            Statement::Analyze(s) => s.to_sql(),
            Statement::Attach(s) => s.to_sql(),
            Statement::Begin(s) => s.to_sql(),
            Statement::Commit(s) => s.to_sql(),
            Statement::Rollback(s) => s.to_sql(),
            Statement::Savepoint(s) => s.to_sql(),
            Statement::Release(s) => s.to_sql(),
            Statement::CreateIndex(s) => s.to_sql(),
            Statement::CreateTable(s) => s.to_sql(),
            Statement::CreateTrigger(s) => s.to_sql(),
            Statement::Select(s) => s.to_sql(),
            Statement::Insert(s) => s.to_sql(),
            Statement::Delete(s) => s.to_sql(),
            Statement::Update(s) => s.to_sql(),
            Statement::CreateView(s) => s.to_sql(),
            Statement::CreateVirtualTable(s) => s.to_sql(),
            Statement::Detach(s) => s.to_sql(),
            Statement::DropIndex(s) => s.to_sql(),
            Statement::DropTable(s) => s.to_sql(),
            Statement::DropTrigger(s) => s.to_sql(),
            Statement::DropView(s) => s.to_sql(),
            Statement::Pragma(s) => s.to_sql(),
            Statement::Reindex(s) => s.to_sql(),
            Statement::Vacuum(s) => s.to_sql(),
            Statement::Explain(s) => s.to_sql(),
        }
    }
}

/// Render a slice of nodes and join with a separator.
pub(crate) fn join_sql<T: ToSql>(items: &[T], separator: &str) -> WinqResult<String> {
    let rendered: Vec<String> = items
        .iter()
        .map(ToSql::to_sql)
        .collect::<WinqResult<_>>()?;
    Ok(rendered.join(separator))
}
