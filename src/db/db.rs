use super::schema;
use super::store::RecordStore;
use crate::libs::config::Config;
use crate::libs::error::TrackerResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Owned SQLite connection with both application tables in place.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured for this user.
    pub fn new() -> TrackerResult<Db> {
        let path = Config::read()?.database_path()?;
        Self::open(&path)
    }

    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> TrackerResult<Db> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn in_memory() -> TrackerResult<Db> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> TrackerResult<Db> {
        let db = Db { conn };
        db.create_tables()?;
        Ok(db)
    }

    /// Creates `workitems` and `entries` if they do not exist yet.
    pub fn create_tables(&self) -> TrackerResult<()> {
        let store = self.store();
        store.create_table(schema::work_items(), true)?;
        store.create_table(schema::time_entries(), true)?;
        Ok(())
    }

    pub fn store(&self) -> RecordStore<'_> {
        RecordStore::new(&self.conn)
    }
}
