//! Rendering of clause nodes shared across statement kinds.

use crate::ast::clauses::{
    Assignment, CommonTableExpression, Limit, OrderingTerm, Pragma, QualifiedTable, TableIndex,
    UpsertAction, UpsertClause, WithClause,
};
use crate::ast::schema_objects::{
    ColumnConstraint, ColumnConstraintKind, ColumnDef, ForeignKeyClause, IndexedColumn,
    IndexedColumnKey, Initially, TableConstraint, TableConstraintKind,
};
use crate::ast::select_parts::{
    JoinClause, JoinConstraint, JoinOperator, ResultColumn, SelectCore, TableOrSubquery,
};
use crate::ast::window::{FilterClause, FrameBound, FrameSpec, WindowDef};
use crate::ast::{NullsOrder, Schema};
use crate::error::{WinqError, WinqResult};
use crate::render::quote::escape_identifier;
use crate::render::{ToSql, join_sql};

impl ToSql for Schema {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(escape_identifier(&self.name))
    }
}

impl ToSql for OrderingTerm {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = self.expr.to_sql()?;
        if let Some(collation) = &self.collation {
            sql.push_str(" COLLATE ");
            sql.push_str(collation);
        }
        if let Some(order) = self.order {
            sql.push(' ');
            sql.push_str(order.keyword());
        }
        if let Some(nulls) = self.nulls {
            sql.push_str(match nulls {
                NullsOrder::First => " NULLS FIRST",
                NullsOrder::Last => " NULLS LAST",
            });
        }
        Ok(sql)
    }
}

impl ToSql for IndexedColumn {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = match &self.key {
            IndexedColumnKey::Column(column) => column.to_sql()?,
            IndexedColumnKey::Expr(expr) => expr.to_sql()?,
        };
        if let Some(collation) = &self.collation {
            sql.push_str(" COLLATE ");
            sql.push_str(collation);
        }
        if let Some(order) = self.order {
            sql.push(' ');
            sql.push_str(order.keyword());
        }
        Ok(sql)
    }
}

impl ToSql for ForeignKeyClause {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = format!("REFERENCES {}", escape_identifier(&self.table));
        if !self.columns.is_empty() {
            sql.push_str(&format!("({})", join_sql(&self.columns, ", ")?));
        }
        if let Some(action) = self.on_delete {
            sql.push_str(" ON DELETE ");
            sql.push_str(action.keyword());
        }
        if let Some(action) = self.on_update {
            sql.push_str(" ON UPDATE ");
            sql.push_str(action.keyword());
        }
        if let Some(name) = &self.match_name {
            sql.push_str(" MATCH ");
            sql.push_str(name);
        }
        if let Some(deferrable) = self.deferrable {
            sql.push_str(if deferrable {
                " DEFERRABLE"
            } else {
                " NOT DEFERRABLE"
            });
            if let Some(initially) = self.initially {
                sql.push_str(match initially {
                    Initially::Deferred => " INITIALLY DEFERRED",
                    Initially::Immediate => " INITIALLY IMMEDIATE",
                });
            }
        }
        Ok(sql)
    }
}

impl ToSql for ColumnConstraint {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = String::new();
        if let Some(name) = &self.name {
            sql.push_str("CONSTRAINT ");
            sql.push_str(&escape_identifier(name));
            sql.push(' ');
        }
        match &self.kind {
            ColumnConstraintKind::PrimaryKey {
                order,
                conflict,
                auto_increment,
            } => {
                sql.push_str("PRIMARY KEY");
                if let Some(order) = order {
                    sql.push(' ');
                    sql.push_str(order.keyword());
                }
                if let Some(conflict) = conflict {
                    sql.push_str(" ON CONFLICT ");
                    sql.push_str(conflict.keyword());
                }
                if *auto_increment {
                    sql.push_str(" AUTOINCREMENT");
                }
            }
            ColumnConstraintKind::NotNull { conflict } => {
                sql.push_str("NOT NULL");
                if let Some(conflict) = conflict {
                    sql.push_str(" ON CONFLICT ");
                    sql.push_str(conflict.keyword());
                }
            }
            ColumnConstraintKind::Unique { conflict } => {
                sql.push_str("UNIQUE");
                if let Some(conflict) = conflict {
                    sql.push_str(" ON CONFLICT ");
                    sql.push_str(conflict.keyword());
                }
            }
            ColumnConstraintKind::Check(condition) => {
                sql.push_str(&format!("CHECK({})", condition.to_sql()?));
            }
            ColumnConstraintKind::Default(value) => {
                sql.push_str(&format!("DEFAULT {}", value.to_sql()?));
            }
            ColumnConstraintKind::Collate(collation) => {
                sql.push_str("COLLATE ");
                sql.push_str(collation);
            }
            ColumnConstraintKind::ForeignKey(clause) => {
                sql.push_str(&clause.to_sql()?);
            }
            ColumnConstraintKind::Generated { expr, stored } => {
                sql.push_str(&format!("GENERATED ALWAYS AS ({})", expr.to_sql()?));
                if *stored {
                    sql.push_str(" STORED");
                }
            }
        }
        Ok(sql)
    }
}

impl ToSql for ColumnDef {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = self.column.to_sql()?;
        if let Some(column_type) = self.column_type {
            sql.push(' ');
            sql.push_str(column_type.keyword());
        }
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(&constraint.to_sql()?);
        }
        Ok(sql)
    }
}

impl ToSql for TableConstraint {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = String::new();
        if let Some(name) = &self.name {
            sql.push_str("CONSTRAINT ");
            sql.push_str(&escape_identifier(name));
            sql.push(' ');
        }
        match &self.kind {
            TableConstraintKind::PrimaryKey { columns, conflict } => {
                sql.push_str(&format!("PRIMARY KEY({})", join_sql(columns, ", ")?));
                if let Some(conflict) = conflict {
                    sql.push_str(" ON CONFLICT ");
                    sql.push_str(conflict.keyword());
                }
            }
            TableConstraintKind::Unique { columns, conflict } => {
                sql.push_str(&format!("UNIQUE({})", join_sql(columns, ", ")?));
                if let Some(conflict) = conflict {
                    sql.push_str(" ON CONFLICT ");
                    sql.push_str(conflict.keyword());
                }
            }
            TableConstraintKind::Check(condition) => {
                sql.push_str(&format!("CHECK({})", condition.to_sql()?));
            }
            TableConstraintKind::ForeignKey { columns, clause } => {
                sql.push_str(&format!(
                    "FOREIGN KEY({}) {}",
                    join_sql(columns, ", ")?,
                    clause.to_sql()?
                ));
            }
        }
        Ok(sql)
    }
}

impl ToSql for QualifiedTable {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = match &self.schema {
            Some(schema) => format!("{}.{}", schema.to_sql()?, escape_identifier(&self.table)),
            None => escape_identifier(&self.table),
        };
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(&escape_identifier(alias));
        }
        match &self.index {
            Some(TableIndex::IndexedBy(index)) => {
                sql.push_str(" INDEXED BY ");
                sql.push_str(&escape_identifier(index));
            }
            Some(TableIndex::NotIndexed) => sql.push_str(" NOT INDEXED"),
            None => {}
        }
        Ok(sql)
    }
}

impl ToSql for CommonTableExpression {
    fn to_sql(&self) -> WinqResult<String> {
        let select = self.select.as_ref().ok_or_else(|| {
            WinqError::invalid_tree("common table expression has no defining select")
        })?;
        let mut sql = escape_identifier(&self.table);
        if !self.columns.is_empty() {
            sql.push_str(&format!("({})", join_sql(&self.columns, ", ")?));
        }
        sql.push_str(" AS (");
        sql.push_str(&select.to_sql()?);
        sql.push(')');
        Ok(sql)
    }
}

/// Renders `WITH [RECURSIVE] cte, ...` followed by a trailing space, or
/// `WITH RECURSIVE ` alone when the flag is set with no CTEs.
pub(crate) fn render_with_prefix(with: &Option<WithClause>) -> WinqResult<String> {
    let Some(with) = with else {
        return Ok(String::new());
    };
    let mut sql = String::from("WITH ");
    if with.recursive {
        sql.push_str("RECURSIVE ");
    }
    if !with.ctes.is_empty() {
        sql.push_str(&join_sql(&with.ctes, ", ")?);
        sql.push(' ');
    }
    Ok(sql)
}

impl ToSql for Assignment {
    fn to_sql(&self) -> WinqResult<String> {
        if self.columns.is_empty() {
            return Err(WinqError::invalid_tree("assignment has no target column"));
        }
        let target = if self.columns.len() == 1 {
            self.columns[0].to_sql()?
        } else {
            format!("({})", join_sql(&self.columns, ", ")?)
        };
        Ok(format!("{target} = {}", self.value.to_sql()?))
    }
}

impl ToSql for UpsertClause {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = String::from("ON CONFLICT");
        if !self.targets.is_empty() {
            sql.push_str(&format!("({})", join_sql(&self.targets, ", ")?));
            if let Some(condition) = &self.target_condition {
                sql.push_str(" WHERE ");
                sql.push_str(&condition.to_sql()?);
            }
        }
        match &self.action {
            UpsertAction::Nothing => sql.push_str(" DO NOTHING"),
            UpsertAction::Update {
                assignments,
                condition,
            } => {
                if assignments.is_empty() {
                    return Err(WinqError::invalid_tree("DO UPDATE has no assignment"));
                }
                sql.push_str(" DO UPDATE SET ");
                sql.push_str(&join_sql(assignments, ", ")?);
                if let Some(condition) = condition {
                    sql.push_str(" WHERE ");
                    sql.push_str(&condition.to_sql()?);
                }
            }
        }
        Ok(sql)
    }
}

impl ToSql for Pragma {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(escape_identifier(&self.name))
    }
}

impl ToSql for FilterClause {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(format!("FILTER (WHERE {})", self.condition.to_sql()?))
    }
}

impl ToSql for FrameBound {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            FrameBound::UnboundedPreceding => "UNBOUNDED PRECEDING".to_string(),
            FrameBound::Preceding(v) => format!("{} PRECEDING", v.to_sql()?),
            FrameBound::CurrentRow => "CURRENT ROW".to_string(),
            FrameBound::Following(v) => format!("{} FOLLOWING", v.to_sql()?),
            FrameBound::UnboundedFollowing => "UNBOUNDED FOLLOWING".to_string(),
        })
    }
}

impl ToSql for FrameSpec {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = self.units.keyword().to_string();
        match &self.end {
            Some(end) => {
                sql.push_str(&format!(
                    " BETWEEN {} AND {}",
                    self.start.to_sql()?,
                    end.to_sql()?
                ));
            }
            None => {
                sql.push(' ');
                sql.push_str(&self.start.to_sql()?);
            }
        }
        if let Some(exclude) = self.exclude {
            sql.push_str(" EXCLUDE ");
            sql.push_str(exclude.keyword());
        }
        Ok(sql)
    }
}

impl ToSql for WindowDef {
    fn to_sql(&self) -> WinqResult<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(base) = &self.base {
            parts.push(escape_identifier(base));
        }
        if !self.partitions.is_empty() {
            parts.push(format!(
                "PARTITION BY {}",
                join_sql(&self.partitions, ", ")?
            ));
        }
        if !self.orders.is_empty() {
            parts.push(format!("ORDER BY {}", join_sql(&self.orders, ", ")?));
        }
        if let Some(frame) = &self.frame {
            parts.push(frame.to_sql()?);
        }
        Ok(format!("({})", parts.join(" ")))
    }
}

impl ToSql for ResultColumn {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            ResultColumn::All => "*".to_string(),
            ResultColumn::TableAll(table) => format!("{}.*", escape_identifier(table)),
            ResultColumn::Expr { expr, alias } => {
                let mut sql = expr.to_sql()?;
                if let Some(alias) = alias {
                    sql.push_str(" AS ");
                    sql.push_str(&escape_identifier(alias));
                }
                sql
            }
        })
    }
}

impl ToSql for TableOrSubquery {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            TableOrSubquery::Table {
                schema,
                table,
                alias,
                index,
                not_indexed,
            } => {
                let mut sql = match schema {
                    Some(schema) => {
                        format!("{}.{}", schema.to_sql()?, escape_identifier(table))
                    }
                    None => escape_identifier(table),
                };
                if let Some(alias) = alias {
                    sql.push_str(" AS ");
                    sql.push_str(&escape_identifier(alias));
                }
                if let Some(index) = index {
                    sql.push_str(" INDEXED BY ");
                    sql.push_str(&escape_identifier(index));
                } else if *not_indexed {
                    sql.push_str(" NOT INDEXED");
                }
                sql
            }
            TableOrSubquery::Function {
                schema,
                name,
                args,
                alias,
            } => {
                let mut sql = match schema {
                    Some(schema) => format!("{}.{name}", schema.to_sql()?),
                    None => name.clone(),
                };
                sql.push_str(&format!("({})", join_sql(args, ", ")?));
                if let Some(alias) = alias {
                    sql.push_str(" AS ");
                    sql.push_str(&escape_identifier(alias));
                }
                sql
            }
            TableOrSubquery::Select { select, alias } => {
                let mut sql = format!("({})", select.to_sql()?);
                if let Some(alias) = alias {
                    sql.push_str(" AS ");
                    sql.push_str(&escape_identifier(alias));
                }
                sql
            }
            TableOrSubquery::Join(join) => format!("({})", join.to_sql()?),
            TableOrSubquery::List(list) => {
                if list.is_empty() {
                    return Err(WinqError::invalid_tree("empty table list"));
                }
                join_sql(list, ", ")?
            }
        })
    }
}

impl ToSql for JoinConstraint {
    fn to_sql(&self) -> WinqResult<String> {
        Ok(match self {
            JoinConstraint::On(condition) => format!("ON {}", condition.to_sql()?),
            JoinConstraint::Using(columns) => format!("USING({})", join_sql(columns, ", ")?),
        })
    }
}

impl ToSql for JoinClause {
    fn to_sql(&self) -> WinqResult<String> {
        let mut sql = self.base.to_sql()?;
        for step in &self.steps {
            if step.op == JoinOperator::Comma {
                sql.push_str(", ");
            } else {
                sql.push(' ');
                if step.natural {
                    sql.push_str("NATURAL ");
                }
                sql.push_str(step.op.keyword());
                sql.push(' ');
            }
            sql.push_str(&step.table.to_sql()?);
            if let Some(constraint) = &step.constraint {
                sql.push(' ');
                sql.push_str(&constraint.to_sql()?);
            }
        }
        Ok(sql)
    }
}

impl ToSql for SelectCore {
    fn to_sql(&self) -> WinqResult<String> {
        match self {
            SelectCore::Select {
                distinct,
                columns,
                from,
                condition,
                group_by,
                having,
                windows,
            } => {
                if columns.is_empty() {
                    return Err(WinqError::missing("SELECT", "result column"));
                }
                let mut sql = String::from("SELECT ");
                if *distinct {
                    sql.push_str("DISTINCT ");
                }
                sql.push_str(&join_sql(columns, ", ")?);
                if let Some(from) = from {
                    sql.push_str(" FROM ");
                    // A join clause is only parenthesized when nested; as the
                    // whole FROM it renders bare.
                    match from {
                        TableOrSubquery::Join(join) => sql.push_str(&join.to_sql()?),
                        other => sql.push_str(&other.to_sql()?),
                    }
                }
                if let Some(condition) = condition {
                    sql.push_str(" WHERE ");
                    sql.push_str(&condition.to_sql()?);
                }
                if !group_by.is_empty() {
                    sql.push_str(" GROUP BY ");
                    sql.push_str(&join_sql(group_by, ", ")?);
                }
                if let Some(having) = having {
                    sql.push_str(" HAVING ");
                    sql.push_str(&having.to_sql()?);
                }
                if !windows.is_empty() {
                    let declarations: Vec<String> = windows
                        .iter()
                        .map(|(name, def)| {
                            Ok(format!("{} AS {}", escape_identifier(name), def.to_sql()?))
                        })
                        .collect::<WinqResult<_>>()?;
                    sql.push_str(" WINDOW ");
                    sql.push_str(&declarations.join(", "));
                }
                Ok(sql)
            }
            SelectCore::Values(rows) => {
                if rows.is_empty() {
                    return Err(WinqError::missing("VALUES", "row"));
                }
                let rendered: Vec<String> = rows
                    .iter()
                    .map(|row| Ok(format!("({})", join_sql(row, ", ")?)))
                    .collect::<WinqResult<_>>()?;
                Ok(format!("VALUES{}", rendered.join(", ")))
            }
        }
    }
}

/// Renders ` LIMIT ...[ OFFSET ...]` (leading space) or an empty string.
pub(crate) fn render_limit_suffix(
    limit: &Option<Limit>,
    offset: &Option<crate::ast::Value>,
) -> WinqResult<String> {
    let mut sql = String::new();
    match limit {
        Some(Limit::Count(count)) => {
            sql.push_str(" LIMIT ");
            sql.push_str(&count.to_sql()?);
            if let Some(offset) = offset {
                sql.push_str(" OFFSET ");
                sql.push_str(&offset.to_sql()?);
            }
        }
        Some(Limit::Range { from, to }) => {
            if offset.is_some() {
                return Err(WinqError::invalid_tree(
                    "OFFSET combined with the LIMIT from, to form",
                ));
            }
            sql.push_str(&format!(" LIMIT {}, {}", from.to_sql()?, to.to_sql()?));
        }
        None => {
            if offset.is_some() {
                return Err(WinqError::invalid_tree("OFFSET without LIMIT"));
            }
        }
    }
    Ok(sql)
}
