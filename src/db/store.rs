//! Generic record storage driven by a [`Schema`].
//!
//! [`RecordStore`] borrows a connection owned by the caller and runs the
//! statements produced by [`crate::db::query`]. It keeps no state of its own:
//! each call is one durability unit, committed before it returns.
//!
//! ## Error model
//!
//! - [`TrackerError::UnknownColumn`]: raised by the query builder before any
//!   statement reaches SQLite.
//! - [`TrackerError::Storage`]: driver failures, propagated unmodified.
//! - A select by id that finds nothing returns an empty vector; deciding
//!   whether that is [`TrackerError::NotFound`] is left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use rusqlite::Connection;
//! use timetrack::db::record::Record;
//! use timetrack::db::schema;
//! use timetrack::db::store::RecordStore;
//!
//! let conn = Connection::open_in_memory()?;
//! let store = RecordStore::new(&conn);
//! store.create_table(schema::work_items(), true)?;
//! store.insert_records(
//!     schema::work_items(),
//!     &[Record::new().with("id", "AAA-BBB").with("label", "Some client")],
//!     Some(&["id", "label"][..]),
//! )?;
//! let items = store.select_by_id(schema::work_items(), "AAA-BBB")?;
//! assert_eq!(items[0].text("label"), Some("Some client"));
//! # Ok::<(), timetrack::libs::error::TrackerError>(())
//! ```

use super::query::{self, ID_COLUMN};
use super::record::{Record, Value};
use super::schema::Schema;
use crate::libs::error::{TrackerError, TrackerResult};
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection};
use tracing::{debug, trace};

pub struct RecordStore<'c> {
    conn: &'c Connection,
}

impl<'c> RecordStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create_table(&self, schema: &Schema, if_not_exists: bool) -> TrackerResult<()> {
        let sql = query::build_create_table(schema, if_not_exists);
        debug!(table = schema.table_name(), "{}", sql);
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    /// Inserts `records` with a single prepared statement.
    ///
    /// `columns` defaults to every schema column. Each record must carry a
    /// value for every inserted column and may not name a column outside the
    /// schema. The batch runs in one transaction: either every record is
    /// stored or none is.
    pub fn insert_records(&self, schema: &Schema, records: &[Record], columns: Option<&[&str]>) -> TrackerResult<usize> {
        let columns: Vec<&str> = match columns {
            Some(columns) => columns.to_vec(),
            None => schema.column_names(),
        };
        let sql = query::build_insert(schema, &columns)?;

        for record in records {
            schema.check_columns(&record.columns().collect::<Vec<_>>())?;
            if let Some(missing) = columns.iter().find(|c| !record.contains(c)) {
                return Err(TrackerError::MissingValue {
                    table: schema.table_name().to_string(),
                    column: missing.to_string(),
                });
            }
        }

        let placeholders: Vec<String> = columns.iter().map(|c| format!(":{}", c)).collect();
        debug!(table = schema.table_name(), batch = records.len(), "{}", sql);

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for record in records {
                let mut bound: Vec<(&str, &dyn ToSql)> = Vec::with_capacity(columns.len());
                for (column, placeholder) in columns.iter().zip(&placeholders) {
                    if let Some(value) = record.get(column) {
                        bound.push((placeholder.as_str(), value as &dyn ToSql));
                    }
                }
                trace!(?record, "inserting");
                stmt.execute(bound.as_slice())?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    pub fn select_all(&self, schema: &Schema, columns: Option<&[&str]>) -> TrackerResult<Vec<Record>> {
        self.run_select(schema, None, &[], columns)
    }

    /// Zero or one record; an empty result is not an error here.
    pub fn select_by_id(&self, schema: &Schema, id: &str) -> TrackerResult<Vec<Record>> {
        let clause = format!("WHERE {} = ?", ID_COLUMN);
        self.run_select(schema, Some(&clause), &[Value::from(id)], None)
    }

    /// Runs a select with a caller supplied `WHERE ...` (and optional
    /// `ORDER BY ...`) clause bound to positional `params`.
    pub fn select_where(&self, schema: &Schema, where_clause: &str, params: &[Value], columns: Option<&[&str]>) -> TrackerResult<Vec<Record>> {
        self.run_select(schema, Some(where_clause), params, columns)
    }

    /// Applies the non-null values of `record` to the row `id`.
    ///
    /// Returns the number of rows changed. Zero is not an error, and a record
    /// whose values are all null changes nothing without running a statement.
    pub fn update_by_id(&self, schema: &Schema, id: &str, record: &Record) -> TrackerResult<usize> {
        let sql = match query::build_update_by_id(schema, record) {
            Ok(sql) => sql,
            Err(TrackerError::EmptyUpdate { .. }) => {
                debug!(table = schema.table_name(), "update with no values skipped");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };

        let placeholders: Vec<(String, &Value)> = record
            .iter()
            .filter(|(column, value)| !value.is_null() && *column != ID_COLUMN)
            .map(|(column, value)| (format!(":{}", column), value))
            .collect();
        let id_value = Value::from(id);
        let id_placeholder = format!(":{}", ID_COLUMN);

        let mut bound: Vec<(&str, &dyn ToSql)> = placeholders.iter().map(|(name, value)| (name.as_str(), *value as &dyn ToSql)).collect();
        bound.push((id_placeholder.as_str(), &id_value as &dyn ToSql));

        debug!(table = schema.table_name(), "{}", sql);
        trace!(id, ?record, "updating");
        let affected = self.conn.execute(&sql, bound.as_slice())?;
        debug!(table = schema.table_name(), affected, "update done");

        Ok(affected)
    }

    /// Deleting an id that does not exist affects zero rows and succeeds.
    pub fn delete_by_id(&self, schema: &Schema, id: &str) -> TrackerResult<usize> {
        let sql = query::build_delete_by_id(schema);
        debug!(table = schema.table_name(), "{}", sql);
        trace!(id, "deleting");
        let affected = self.conn.execute(&sql, params![id])?;
        debug!(table = schema.table_name(), affected, "delete done");
        Ok(affected)
    }

    fn run_select(&self, schema: &Schema, where_clause: Option<&str>, params: &[Value], columns: Option<&[&str]>) -> TrackerResult<Vec<Record>> {
        let sql = query::build_select(schema, columns, where_clause)?;
        let names: Vec<&str> = match columns {
            Some(columns) => columns.to_vec(),
            None => schema.column_names(),
        };
        let datetime: Vec<bool> = names
            .iter()
            .map(|name| schema.column(name).map(|c| c.sql_type().is_datetime()).unwrap_or(false))
            .collect();

        debug!(table = schema.table_name(), "{}", sql);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Record::new();
            for (idx, name) in names.iter().enumerate() {
                let value = Value::from_sql(row.get_ref(idx)?, datetime[idx])
                    .map_err(|ty| rusqlite::Error::InvalidColumnType(idx, name.to_string(), ty))?;
                record.set(name, value);
            }
            records.push(record);
        }
        debug!(table = schema.table_name(), count = records.len(), "select done");

        Ok(records)
    }
}
