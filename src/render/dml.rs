//! Rendering of SELECT, INSERT, UPDATE and DELETE.

use crate::ast::clauses::OrderingTerm;
use crate::ast::stmt::insert::InsertSource;
use crate::ast::{StatementDelete, StatementInsert, StatementSelect, StatementUpdate};
use crate::error::{WinqError, WinqResult};
use crate::render::clause::{render_limit_suffix, render_with_prefix};
use crate::render::quote::escape_identifier;
use crate::render::{ToSql, join_sql};

fn render_order_suffix(orders: &[OrderingTerm]) -> WinqResult<String> {
    if orders.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!(" ORDER BY {}", join_sql(orders, ", ")?))
    }
}

impl ToSql for StatementSelect {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = render_with_prefix(&self.with)?;
        sql.push_str(&self.core.to_sql()?);
        for (op, core) in &self.compounds {
            sql.push(' ');
            sql.push_str(op.keyword());
            sql.push(' ');
            sql.push_str(&core.to_sql()?);
        }
        sql.push_str(&render_order_suffix(&self.orders)?);
        sql.push_str(&render_limit_suffix(&self.limit, &self.offset)?);
        Ok(sql)
    }
}

impl ToSql for StatementInsert {
    fn to_sql(&self) -> WinqResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("INSERT", "INTO"))?;

        let mut sql = render_with_prefix(&self.with)?;
        sql.push_str("INSERT");
        if let Some(conflict) = self.or_conflict {
            sql.push_str(" OR ");
            sql.push_str(conflict.keyword());
        }
        sql.push_str(" INTO ");
        if let Some(schema) = &self.schema {
            sql.push_str(&schema.to_sql()?);
            sql.push('.');
        }
        sql.push_str(&escape_identifier(table));
        if !self.columns.is_empty() {
            sql.push_str(&format!("({})", join_sql(&self.columns, ", ")?));
        }
        match &self.source {
            InsertSource::Unset => {
                return Err(WinqError::missing("INSERT", "VALUES or SELECT"));
            }
            InsertSource::Values(rows) => {
                let rendered: Vec<String> = rows
                    .iter()
                    .map(|row| Ok(format!("({})", join_sql(row, ", ")?)))
                    .collect::<WinqResult<_>>()?;
                sql.push_str(" VALUES");
                sql.push_str(&rendered.join(", "));
            }
            InsertSource::Select(select) => {
                sql.push(' ');
                sql.push_str(&select.to_sql()?);
            }
            InsertSource::DefaultValues => sql.push_str(" DEFAULT VALUES"),
        }
        for upsert in &self.upserts {
            sql.push(' ');
            sql.push_str(&upsert.to_sql()?);
        }
        Ok(sql)
    }
}

impl ToSql for StatementUpdate {
    fn to_sql(&self) -> WinqResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("UPDATE", "table"))?;
        if self.assignments.is_empty() {
            return Err(WinqError::missing("UPDATE", "SET"));
        }

        let mut sql = render_with_prefix(&self.with)?;
        sql.push_str("UPDATE ");
        if let Some(conflict) = self.or_conflict {
            sql.push_str("OR ");
            sql.push_str(conflict.keyword());
            sql.push(' ');
        }
        sql.push_str(&table.to_sql()?);
        sql.push_str(" SET ");
        sql.push_str(&join_sql(&self.assignments, ", ")?);
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(&condition.to_sql()?);
        }
        sql.push_str(&render_order_suffix(&self.orders)?);
        sql.push_str(&render_limit_suffix(&self.limit, &self.offset)?);
        Ok(sql)
    }
}

impl ToSql for StatementDelete {
    fn to_sql(&self) -> WinqResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("DELETE", "FROM"))?;

        let mut sql = render_with_prefix(&self.with)?;
        sql.push_str("DELETE FROM ");
        sql.push_str(&table.to_sql()?);
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(&condition.to_sql()?);
        }
        sql.push_str(&render_order_suffix(&self.orders)?);
        sql.push_str(&render_limit_suffix(&self.limit, &self.offset)?);
        Ok(sql)
    }
}
