//! Database layer.
//!
//! Everything above [`store`] talks to SQLite through a [`schema::Schema`]:
//! statements are generated by [`query`] from the declared columns, so a
//! record key that is not a column never reaches SQL.
//!
//! ```text
//! WorkItems / TimeEntries ──▶ RecordStore ──▶ query builders ──▶ rusqlite
//!                                  │
//!                                  └── Schema (columns, types, defaults)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use timetrack::db::{db::Db, workitems::{WorkItem, WorkItems}};
//!
//! let db = Db::in_memory()?;
//! let items = WorkItems::new(&db);
//! items.insert(&[WorkItem::new("AAA-BBB", "Some client")])?;
//! assert!(items.exists("AAA-BBB")?);
//! # Ok::<(), timetrack::libs::error::TrackerError>(())
//! ```

/// Connection handling and table creation.
pub mod db;

/// Time entry repository.
pub mod entries;

/// SQL text generation from a schema.
pub mod query;

/// Dynamic rows and column values.
pub mod record;

/// Table descriptors for `workitems` and `entries`.
pub mod schema;

/// Demo data for `init --seed`.
pub mod seed;

/// Schema-checked CRUD over a connection.
pub mod store;

/// Work item repository.
pub mod workitems;
