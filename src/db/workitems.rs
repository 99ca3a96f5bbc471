use super::db::Db;
use super::record::Record;
use super::schema::{self, Schema};
use super::store::RecordStore;
use crate::libs::error::{TrackerError, TrackerResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const ORDER_BY_ID: &str = "ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub label: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl WorkItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            timestamp: None,
        }
    }
}

impl TryFrom<&Record> for WorkItem {
    type Error = TrackerError;

    fn try_from(record: &Record) -> TrackerResult<Self> {
        let missing = |column: &str| TrackerError::MissingValue {
            table: schema::work_items().table_name().to_string(),
            column: column.to_string(),
        };

        Ok(WorkItem {
            id: record.text("id").ok_or_else(|| missing("id"))?.to_string(),
            label: record.text("label").unwrap_or_default().to_string(),
            timestamp: record.datetime("timestamp"),
        })
    }
}

/// Work item repository over the `workitems` table.
pub struct WorkItems<'a> {
    store: RecordStore<'a>,
}

impl<'a> WorkItems<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { store: db.store() }
    }

    fn schema() -> &'static Schema {
        schema::work_items()
    }

    /// All work items ordered by id.
    pub fn list(&self) -> TrackerResult<Vec<WorkItem>> {
        self.store
            .select_where(Self::schema(), ORDER_BY_ID, &[], None)?
            .iter()
            .map(WorkItem::try_from)
            .collect()
    }

    pub fn ids(&self) -> TrackerResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|item| item.id).collect())
    }

    pub fn get(&self, id: &str) -> TrackerResult<Option<WorkItem>> {
        self.store
            .select_by_id(Self::schema(), id)?
            .first()
            .map(WorkItem::try_from)
            .transpose()
    }

    /// Like [`WorkItems::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> TrackerResult<WorkItem> {
        self.get(id)?
            .ok_or_else(|| TrackerError::not_found(Self::schema().table_name(), id))
    }

    pub fn exists(&self, id: &str) -> TrackerResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Inserts new work items; the creation timestamp comes from the column
    /// default.
    pub fn insert(&self, items: &[WorkItem]) -> TrackerResult<usize> {
        let records: Vec<Record> = items
            .iter()
            .map(|item| Record::new().with("id", item.id.as_str()).with("label", item.label.as_str()))
            .collect();
        self.store.insert_records(Self::schema(), &records, Some(&["id", "label"][..]))
    }

    /// Replaces the label. `None` leaves the item untouched.
    pub fn update_label(&self, id: &str, label: Option<&str>) -> TrackerResult<usize> {
        let record = Record::new().with("label", label);
        self.store.update_by_id(Self::schema(), id, &record)
    }

    pub fn delete(&self, id: &str) -> TrackerResult<usize> {
        self.store.delete_by_id(Self::schema(), id)
    }
}
