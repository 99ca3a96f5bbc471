//! SQL text generation from a [`Schema`].
//!
//! Every builder here is pure: it validates the requested column names
//! against the schema and returns the statement text, or
//! [`TrackerError::UnknownColumn`] naming the first offending column. Nothing
//! is executed; binding values is the job of
//! [`RecordStore`](crate::db::store::RecordStore).
//!
//! ## Statement shapes
//!
//! ```text
//! CREATE TABLE IF NOT EXISTS entries(id varchar(500) PRIMARY KEY, time NUMBER, ...);
//! INSERT INTO entries (id, time) VALUES (:id, :time)
//! SELECT id, time FROM entries WHERE DATE(timestamp) = ?
//! UPDATE entries SET desc = :desc WHERE id = :id
//! DELETE FROM entries WHERE id = ?
//! ```
//!
//! Insert and update use named placeholders equal to the column name, so a
//! record binds by key. Select and delete use positional `?` parameters.

use super::record::Record;
use super::schema::{Column, Schema};
use crate::libs::error::{TrackerError, TrackerResult};

/// Name of the primary key column used by the `*_by_id` statements.
pub const ID_COLUMN: &str = "id";

fn column_definition(column: &Column) -> String {
    if let Some(fk) = column.foreign_key() {
        return format!("FOREIGN KEY({}) REFERENCES {}({})", column.name(), fk.table, fk.column);
    }

    let mut definition = format!("{} {}", column.name(), column.sql_type());
    if column.is_primary_key() {
        definition.push_str(" PRIMARY KEY");
    }
    if let Some(default) = column.default_expr() {
        definition.push_str(" DEFAULT ");
        definition.push_str(default);
    }
    definition
}

pub fn build_create_table(schema: &Schema, if_not_exists: bool) -> String {
    let columns = schema
        .columns()
        .iter()
        .map(column_definition)
        .collect::<Vec<_>>()
        .join(", ");

    let guard = if if_not_exists { " IF NOT EXISTS" } else { "" };
    format!("CREATE TABLE{} {}({});", guard, schema.table_name(), columns)
}

pub fn build_insert(schema: &Schema, columns: &[&str]) -> TrackerResult<String> {
    schema.check_columns(columns)?;

    let placeholders = columns.iter().map(|c| format!(":{}", c)).collect::<Vec<_>>();

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.table_name(),
        columns.join(", "),
        placeholders.join(", ")
    ))
}

/// `None` selects every schema column. `where_clause` is appended verbatim
/// and may carry `ORDER BY` as well.
pub fn build_select(schema: &Schema, columns: Option<&[&str]>, where_clause: Option<&str>) -> TrackerResult<String> {
    let names: Vec<&str> = match columns {
        Some(columns) => {
            schema.check_columns(columns)?;
            columns.to_vec()
        }
        None => schema.column_names(),
    };

    let mut query = format!("SELECT {} FROM {}", names.join(", "), schema.table_name());
    if let Some(clause) = where_clause.map(str::trim).filter(|c| !c.is_empty()) {
        query.push(' ');
        query.push_str(clause);
    }
    Ok(query)
}

/// Only keys with a non-null value end up in the `SET` list, so `null`
/// means "leave unchanged".
pub fn build_update_by_id(schema: &Schema, record: &Record) -> TrackerResult<String> {
    schema.check_columns(&record.columns().collect::<Vec<_>>())?;

    let assignments = record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(column, _)| format!("{} = :{}", column, column))
        .collect::<Vec<_>>();

    if assignments.is_empty() {
        return Err(TrackerError::EmptyUpdate {
            table: schema.table_name().to_string(),
        });
    }

    Ok(format!(
        "UPDATE {} SET {} WHERE {} = :{}",
        schema.table_name(),
        assignments.join(", "),
        ID_COLUMN,
        ID_COLUMN
    ))
}

pub fn build_delete_by_id(schema: &Schema) -> String {
    format!("DELETE FROM {} WHERE {} = ?", schema.table_name(), ID_COLUMN)
}
