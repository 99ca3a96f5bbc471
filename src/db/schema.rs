//! Declarative table descriptions.
//!
//! A [`Schema`] names a table and lists its columns in order. It carries no
//! behaviour beyond the derived column-name list; the SQL text is produced by
//! [`crate::db::query`] and executed by [`crate::db::store::RecordStore`].
//!
//! ## Built-in tables
//!
//! | table       | columns                                           |
//! |-------------|---------------------------------------------------|
//! | `entries`   | `id`, `time`, `workitem`, `desc`, `timestamp`     |
//! | `workitems` | `id`, `label`, `timestamp`                        |
//!
//! `entries.workitem` refers to `workitems.id` logically. The reference is not
//! declared on the column: a column carrying a foreign key renders as a
//! `FOREIGN KEY(..)` constraint clause instead of a column definition, which
//! SQLite would reject for a column that is not otherwise declared.
//!
//! ## Usage
//!
//! ```rust
//! use timetrack::db::schema::{Column, Schema, SqlType};
//!
//! let schema = Schema::new(
//!     "projects",
//!     vec![
//!         Column::new("id", SqlType::Varchar(500)).primary_key(),
//!         Column::new("name", SqlType::Text),
//!     ],
//! )?;
//! assert_eq!(schema.column_names(), vec!["id", "name"]);
//! # Ok::<(), timetrack::libs::error::TrackerError>(())
//! ```

use crate::libs::error::{TrackerError, TrackerResult};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Default expression for creation timestamps, stored in local time.
pub const LOCAL_TIMESTAMP_DEFAULT: &str = "(datetime(CURRENT_TIMESTAMP, 'localtime'))";

/// Column storage type as written into `CREATE TABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Number,
    DateTime,
    Varchar(u32),
}

impl SqlType {
    pub fn is_datetime(&self) -> bool {
        matches!(self, SqlType::DateTime)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Text => write!(f, "TEXT"),
            SqlType::Number => write!(f, "NUMBER"),
            SqlType::DateTime => write!(f, "DATETIME"),
            SqlType::Varchar(len) => write!(f, "varchar({})", len),
        }
    }
}

/// Target of a foreign-key reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    sql_type: SqlType,
    primary_key: bool,
    default: Option<String>,
    foreign_key: Option<ForeignKey>,
}

impl Column {
    pub fn new(name: &str, sql_type: SqlType) -> Self {
        Column {
            name: name.to_string(),
            sql_type,
            primary_key: false,
            default: None,
            foreign_key: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets the raw SQL default expression, e.g. `CURRENT_TIMESTAMP`.
    pub fn with_default(mut self, expr: &str) -> Self {
        self.default = Some(expr.to_string());
        self
    }

    pub fn references(mut self, table: &str, column: &str) -> Self {
        self.foreign_key = Some(ForeignKey {
            table: table.to_string(),
            column: column.to_string(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn default_expr(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn foreign_key(&self) -> Option<&ForeignKey> {
        self.foreign_key.as_ref()
    }
}

/// Immutable description of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    table_name: String,
    columns: Vec<Column>,
}

impl Schema {
    /// Builds a schema, rejecting repeated column names.
    pub fn new(table_name: &str, columns: Vec<Column>) -> TrackerResult<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(TrackerError::DuplicateColumn {
                    table: table_name.to_string(),
                    column: column.name().to_string(),
                });
            }
        }

        Ok(Schema {
            table_name: table_name.to_string(),
            columns,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Fails with [`TrackerError::UnknownColumn`] on the first name that is
    /// not part of this table.
    pub fn check_columns<S: AsRef<str>>(&self, columns: &[S]) -> TrackerResult<()> {
        match columns.iter().find(|c| !self.has_column(c.as_ref())) {
            Some(col) => Err(TrackerError::unknown_column(&self.table_name, col.as_ref())),
            None => Ok(()),
        }
    }
}

static TIME_ENTRY_SCHEMA: LazyLock<Schema> = LazyLock::new(|| Schema {
    table_name: "entries".to_string(),
    columns: vec![
        Column::new("id", SqlType::Varchar(500)).primary_key(),
        Column::new("time", SqlType::Number),
        Column::new("workitem", SqlType::Text),
        Column::new("desc", SqlType::Text),
        Column::new("timestamp", SqlType::DateTime).with_default(LOCAL_TIMESTAMP_DEFAULT),
    ],
});

static WORK_ITEM_SCHEMA: LazyLock<Schema> = LazyLock::new(|| Schema {
    table_name: "workitems".to_string(),
    columns: vec![
        Column::new("id", SqlType::Varchar(500)).primary_key(),
        Column::new("label", SqlType::Text),
        Column::new("timestamp", SqlType::DateTime).with_default(LOCAL_TIMESTAMP_DEFAULT),
    ],
});

/// Schema of the `entries` table.
pub fn time_entries() -> &'static Schema {
    &TIME_ENTRY_SCHEMA
}

/// Schema of the `workitems` table.
pub fn work_items() -> &'static Schema {
    &WORK_ITEM_SCHEMA
}
