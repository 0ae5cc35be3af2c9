//! Rendering of schema statements: CREATE/DROP/ALTER.

use crate::ast::stmt::alter_table::Alteration;
use crate::ast::stmt::create_trigger::{TriggerEvent, TriggerStep};
use crate::ast::{
    Schema, StatementAlterTable, StatementCreateIndex, StatementCreateTable,
    StatementCreateTrigger, StatementCreateView, StatementCreateVirtualTable, StatementDropIndex,
    StatementDropTable, StatementDropTrigger, StatementDropView,
};
use crate::error::{WinqError, WinqResult};
use crate::render::quote::escape_identifier;
use crate::render::{ToSql, join_sql};

pub(crate) fn qualified_name(schema: &Option<Schema>, name: &str) -> WinqResult<String> {
    Ok(match schema {
        Some(schema) => format!("{}.{}", schema.to_sql()?, escape_identifier(name)),
        None => escape_identifier(name),
    })
}

impl ToSql for StatementCreateTable {
    fn to_sql(&self) -> WinqResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE TABLE", "table name"))?;

        let mut sql = String::from("CREATE ");
        if self.temp {
            sql.push_str("TEMP ");
        }
        sql.push_str("TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&qualified_name(&self.schema, table)?);

        if let Some(select) = &self.as_select {
            sql.push_str(" AS ");
            sql.push_str(&select.to_sql()?);
            return Ok(sql);
        }

        if self.columns.is_empty() {
            return Err(WinqError::missing("CREATE TABLE", "column definition"));
        }
        let mut defs = join_sql(&self.columns, ", ")?;
        if !self.constraints.is_empty() {
            defs.push_str(", ");
            defs.push_str(&join_sql(&self.constraints, ", ")?);
        }
        sql.push_str(&format!("({defs})"));
        if self.without_rowid {
            sql.push_str(" WITHOUT ROWID");
        }
        Ok(sql)
    }
}

impl ToSql for StatementCreateIndex {
    fn to_sql(&self) -> WinqResult<String> {
        let index = self
            .index
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE INDEX", "index name"))?;
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE INDEX", "ON"))?;
        if self.columns.is_empty() {
            return Err(WinqError::missing("CREATE INDEX", "indexed column"));
        }

        let mut sql = String::from("CREATE ");
        if self.unique {
            sql.push_str("UNIQUE ");
        }
        sql.push_str("INDEX ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&qualified_name(&self.schema, index)?);
        sql.push_str(" ON ");
        sql.push_str(&escape_identifier(table));
        sql.push_str(&format!("({})", join_sql(&self.columns, ", ")?));
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(&condition.to_sql()?);
        }
        Ok(sql)
    }
}

impl ToSql for StatementCreateView {
    fn to_sql(&self) -> WinqResult<String> {
        let view = self
            .view
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE VIEW", "view name"))?;
        let select = self
            .select
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE VIEW", "AS SELECT"))?;

        let mut sql = String::from("CREATE ");
        if self.temp {
            sql.push_str("TEMP ");
        }
        sql.push_str("VIEW ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&qualified_name(&self.schema, view)?);
        if !self.columns.is_empty() {
            sql.push_str(&format!("({})", join_sql(&self.columns, ", ")?));
        }
        sql.push_str(" AS ");
        sql.push_str(&select.to_sql()?);
        Ok(sql)
    }
}

impl ToSql for StatementCreateTrigger {
    fn to_sql(&self) -> WinqResult<String> {
        let trigger = self
            .trigger
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE TRIGGER", "trigger name"))?;
        let event = self
            .event
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE TRIGGER", "event"))?;
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE TRIGGER", "ON table"))?;
        if self.body.is_empty() {
            return Err(WinqError::missing("CREATE TRIGGER", "body statement"));
        }

        let mut sql = String::from("CREATE ");
        if self.temp {
            sql.push_str("TEMP ");
        }
        sql.push_str("TRIGGER ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&qualified_name(&self.schema, trigger)?);
        if let Some(timing) = self.timing {
            sql.push(' ');
            sql.push_str(timing.keyword());
        }
        match event {
            TriggerEvent::Delete => sql.push_str(" DELETE"),
            TriggerEvent::Insert => sql.push_str(" INSERT"),
            TriggerEvent::Update(columns) => {
                sql.push_str(" UPDATE");
                if !columns.is_empty() {
                    sql.push_str(" OF ");
                    sql.push_str(&join_sql(columns, ", ")?);
                }
            }
        }
        sql.push_str(" ON ");
        sql.push_str(&escape_identifier(table));
        if self.for_each_row {
            sql.push_str(" FOR EACH ROW");
        }
        if let Some(when) = &self.when {
            sql.push_str(" WHEN ");
            sql.push_str(&when.to_sql()?);
        }
        sql.push_str(" BEGIN ");
        for step in &self.body {
            let step_sql = match step {
                TriggerStep::Insert(s) => s.to_sql()?,
                TriggerStep::Update(s) => s.to_sql()?,
                TriggerStep::Delete(s) => s.to_sql()?,
                TriggerStep::Select(s) => s.to_sql()?,
            };
            sql.push_str(&step_sql);
            sql.push_str("; ");
        }
        sql.push_str("END");
        Ok(sql)
    }
}

impl ToSql for StatementCreateVirtualTable {
    fn to_sql(&self) -> WinqResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE VIRTUAL TABLE", "table name"))?;
        let module = self
            .module
            .as_ref()
            .ok_or_else(|| WinqError::missing("CREATE VIRTUAL TABLE", "USING module"))?;

        let mut sql = String::from("CREATE VIRTUAL TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&qualified_name(&self.schema, table)?);
        sql.push_str(" USING ");
        sql.push_str(module);
        if !self.arguments.is_empty() {
            sql.push_str(&format!("({})", self.arguments.join(", ")));
        }
        Ok(sql)
    }
}

impl ToSql for StatementAlterTable {
    fn to_sql(&self) -> WinqResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| WinqError::missing("ALTER TABLE", "table name"))?;
        let alteration = self
            .alteration
            .as_ref()
            .ok_or_else(|| WinqError::missing("ALTER TABLE", "alteration"))?;

        let mut sql = format!("ALTER TABLE {}", qualified_name(&self.schema, table)?);
        match alteration {
            Alteration::RenameTo(name) => {
                sql.push_str(" RENAME TO ");
                sql.push_str(&escape_identifier(name));
            }
            Alteration::RenameColumn { from, to } => {
                sql.push_str(&format!(
                    " RENAME COLUMN {} TO {}",
                    from.to_sql()?,
                    to.to_sql()?
                ));
            }
            Alteration::AddColumn(def) => {
                sql.push_str(" ADD COLUMN ");
                sql.push_str(&def.to_sql()?);
            }
            Alteration::DropColumn(column) => {
                sql.push_str(" DROP COLUMN ");
                sql.push_str(&column.to_sql()?);
            }
        }
        Ok(sql)
    }
}

macro_rules! drop_to_sql {
    ($ty:ident, $keyword:literal, $clause:literal) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> WinqResult<String> {
                let name = self
                    .name
                    .as_ref()
                    .ok_or_else(|| WinqError::missing($keyword, $clause))?;
                let mut sql = String::from(concat!($keyword, " "));
                if self.if_exists {
                    sql.push_str("IF EXISTS ");
                }
                sql.push_str(&qualified_name(&self.schema, name)?);
                Ok(sql)
            }
        }
    };
}

drop_to_sql!(StatementDropTable, "DROP TABLE", "table name");
drop_to_sql!(StatementDropIndex, "DROP INDEX", "index name");
drop_to_sql!(StatementDropView, "DROP VIEW", "view name");
drop_to_sql!(StatementDropTrigger, "DROP TRIGGER", "trigger name");
