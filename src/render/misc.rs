//! Rendering of maintenance, transaction and session statements.

use crate::ast::stmt::reindex::ReindexTarget;
use crate::ast::{
    StatementAnalyze, StatementAttach, StatementBegin, StatementCommit, StatementDetach,
    StatementExplain, StatementPragma, StatementReindex, StatementRelease, StatementRollback,
    StatementSavepoint, StatementVacuum,
};
use crate::error::{WinqError, WinqResult};
use crate::render::ToSql;
use crate::render::ddl::qualified_name;
use crate::render::quote::escape_identifier;

impl ToSql for StatementAnalyze {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = String::from("ANALYZE");
        match (&self.schema, &self.table, &self.index) {
            (schema, Some(table), _) => {
                sql.push(' ');
                sql.push_str(&qualified_name(schema, table)?);
            }
            (schema, _, Some(index)) => {
                sql.push(' ');
                sql.push_str(&qualified_name(schema, index)?);
            }
            (Some(schema), None, None) => {
                sql.push(' ');
                sql.push_str(&schema.to_sql()?);
            }
            (None, None, None) => {}
        }
        Ok(sql)
    }
}

impl ToSql for StatementAttach {
    fn to_sql(&self) -> WinqResult<String> {
        let expression = self
            .expression
            .as_ref()
            .ok_or_else(|| WinqError::missing("ATTACH", "database expression"))?;
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| WinqError::missing("ATTACH", "AS schema"))?;
        Ok(format!(
            "ATTACH {} AS {}",
            expression.to_sql()?,
            schema.to_sql()?
        ))
    }
}

impl ToSql for StatementDetach {
    fn to_sql(&self) -> WinqResult<String> {
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| WinqError::missing("DETACH", "schema"))?;
        Ok(format!("DETACH {}", schema.to_sql()?))
    }
}

impl ToSql for StatementBegin {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self.mode {
            Some(mode) => format!("BEGIN {}", mode.keyword()),
            None => "BEGIN".to_string(),
        })
    }
}

impl ToSql for StatementCommit {
    fn to_sql(&self) -> WinqResult<String> {
        Ok("COMMIT".to_string())
    }
}

impl ToSql for StatementRollback {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match &self.savepoint {
            Some(name) => format!("ROLLBACK TO SAVEPOINT {}", escape_identifier(name)),
            None => "ROLLBACK".to_string(),
        })
    }
}

impl ToSql for StatementSavepoint {
    fn to_sql(&self) -> WinqResult<String> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| WinqError::missing("SAVEPOINT", "savepoint name"))?;
        Ok(format!("SAVEPOINT {}", escape_identifier(name)))
    }
}

impl ToSql for StatementRelease {
    fn to_sql(&self) -> WinqResult<String> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| WinqError::missing("RELEASE", "savepoint name"))?;
        Ok(format!("RELEASE SAVEPOINT {}", escape_identifier(name)))
    }
}

impl ToSql for StatementPragma {
    fn to_sql(&self) -> WinqResult<String> {
        let pragma = self
            .pragma
            .as_ref()
            .ok_or_else(|| WinqError::missing("PRAGMA", "pragma name"))?;
        let mut sql = String::from("PRAGMA ");
        if let Some(schema) = &self.schema {
            sql.push_str(&schema.to_sql()?);
            sql.push('.');
        }
        sql.push_str(&pragma.to_sql()?);
        if let Some(value) = &self.value {
            if self.call_form {
                sql.push_str(&format!("({})", value.to_sql()?));
            } else {
                sql.push_str(&format!(" = {}", value.to_sql()?));
            }
        }
        Ok(sql)
    }
}

impl ToSql for StatementReindex {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = String::from("REINDEX");
        match &self.target {
            // Collation names are never schema-qualified.
            Some(ReindexTarget::Collation(name)) => {
                sql.push(' ');
                sql.push_str(&escape_identifier(name));
            }
            Some(ReindexTarget::Table(name)) | Some(ReindexTarget::Index(name)) => {
                sql.push(' ');
                sql.push_str(&qualified_name(&self.schema, name)?);
            }
            None => {}
        }
        Ok(sql)
    }
}

impl ToSql for StatementVacuum {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = String::from("VACUUM");
        if let Some(schema) = &self.schema {
            sql.push(' ');
            sql.push_str(&schema.to_sql()?);
        }
        if let Some(into) = &self.into {
            sql.push_str(" INTO ");
            sql.push_str(&into.to_sql()?);
        }
        Ok(sql)
    }
}

impl ToSql for StatementExplain {
    fn to_sql(&self) -> WinqResult<String> {
        let statement = self
            .statement
            .as_ref()
            .ok_or_else(|| WinqError::missing("EXPLAIN", "inner statement"))?;
        let prefix = if self.query_plan {
            "EXPLAIN QUERY PLAN "
        } else {
            "EXPLAIN "
        };
        Ok(format!("{prefix}{}", statement.to_sql()?))
    }
}
