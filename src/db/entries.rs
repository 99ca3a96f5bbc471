use super::db::Db;
use super::record::{Record, Value};
use super::schema::{self, Schema};
use super::store::RecordStore;
use crate::libs::error::{TrackerError, TrackerResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const WHERE_DAY: &str = "WHERE DATE(timestamp) = ? ORDER BY timestamp";
const WHERE_RANGE: &str = "WHERE DATE(timestamp) BETWEEN DATE(?) AND DATE(?) ORDER BY timestamp";
const WHERE_WORKITEM: &str = "WHERE workitem = ?";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    /// Elapsed time in seconds.
    pub time: u64,
    pub workitem: String,
    pub desc: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl TimeEntry {
    /// A new entry with a random id and no timestamp yet.
    pub fn new(workitem: &str, time: u64, desc: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            time,
            workitem: workitem.to_string(),
            desc: desc.to_string(),
            timestamp: None,
        }
    }

    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn to_record(&self) -> Record {
        let record = Record::new()
            .with("id", self.id.as_str())
            .with("time", self.time)
            .with("desc", self.desc.as_str())
            .with("workitem", self.workitem.as_str());
        match self.timestamp {
            Some(ts) => record.with("timestamp", ts),
            None => record,
        }
    }
}

impl TryFrom<&Record> for TimeEntry {
    type Error = TrackerError;

    fn try_from(record: &Record) -> TrackerResult<Self> {
        let missing = |column: &str| TrackerError::MissingValue {
            table: schema::time_entries().table_name().to_string(),
            column: column.to_string(),
        };

        let time = record.integer("time").ok_or_else(|| missing("time"))?;
        let time = u64::try_from(time).map_err(|_| TrackerError::InvalidValue {
            table: schema::time_entries().table_name().to_string(),
            column: "time".to_string(),
            value: time.to_string(),
        })?;

        Ok(TimeEntry {
            id: record.text("id").ok_or_else(|| missing("id"))?.to_string(),
            time,
            workitem: record.text("workitem").ok_or_else(|| missing("workitem"))?.to_string(),
            desc: record.text("desc").unwrap_or_default().to_string(),
            timestamp: record.datetime("timestamp"),
        })
    }
}

/// Time entry repository over the `entries` table.
pub struct TimeEntries<'a> {
    store: RecordStore<'a>,
}

impl<'a> TimeEntries<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { store: db.store() }
    }

    fn schema() -> &'static Schema {
        schema::time_entries()
    }

    /// Stores a finished timer; the timestamp is filled in by the database.
    pub fn insert(&self, entry: &TimeEntry) -> TrackerResult<()> {
        let record = entry.to_record();
        let columns: Vec<&str> = record.columns().collect();
        self.store
            .insert_records(Self::schema(), std::slice::from_ref(&record), Some(columns.as_slice()))?;
        Ok(())
    }

    /// Inserts a batch of entries that all carry explicit timestamps.
    pub fn insert_many(&self, entries: &[TimeEntry]) -> TrackerResult<usize> {
        let records: Vec<Record> = entries.iter().map(TimeEntry::to_record).collect();
        self.store.insert_records(Self::schema(), &records, None)
    }

    pub fn get(&self, id: &str) -> TrackerResult<Option<TimeEntry>> {
        self.store
            .select_by_id(Self::schema(), id)?
            .first()
            .map(TimeEntry::try_from)
            .transpose()
    }

    pub fn require(&self, id: &str) -> TrackerResult<TimeEntry> {
        self.get(id)?
            .ok_or_else(|| TrackerError::not_found(Self::schema().table_name(), id))
    }

    /// Entries recorded on `date`, oldest first.
    pub fn fetch_day(&self, date: NaiveDate) -> TrackerResult<Vec<TimeEntry>> {
        let params = [Value::from(date.format(DATE_FORMAT).to_string())];
        self.fetch(WHERE_DAY, &params)
    }

    /// Entries recorded between `start` and `end`, both days included.
    pub fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> TrackerResult<Vec<TimeEntry>> {
        if start > end {
            return Err(TrackerError::InvalidDate(format!("start date {} is after end date {}", start, end)));
        }
        let params = [
            Value::from(start.format(DATE_FORMAT).to_string()),
            Value::from(end.format(DATE_FORMAT).to_string()),
        ];
        self.fetch(WHERE_RANGE, &params)
    }

    /// Number of entries booked on `workitem`.
    pub fn count_for_workitem(&self, workitem: &str) -> TrackerResult<usize> {
        let params = [Value::from(workitem)];
        Ok(self.store.select_where(Self::schema(), WHERE_WORKITEM, &params, Some(&["id"][..]))?.len())
    }

    /// Partial update: `None` fields keep their stored value.
    pub fn update(&self, id: &str, desc: Option<&str>, time: Option<u64>) -> TrackerResult<usize> {
        let record = Record::new().with("desc", desc).with("time", time);
        self.store.update_by_id(Self::schema(), id, &record)
    }

    pub fn delete(&self, id: &str) -> TrackerResult<usize> {
        self.store.delete_by_id(Self::schema(), id)
    }

    fn fetch(&self, clause: &str, params: &[Value]) -> TrackerResult<Vec<TimeEntry>> {
        self.store
            .select_where(Self::schema(), clause, params, None)?
            .iter()
            .map(TimeEntry::try_from)
            .collect()
    }
}
