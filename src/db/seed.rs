//! Demo data for a fresh database.

use super::db::Db;
use super::entries::{TimeEntries, TimeEntry};
use super::record::DATETIME_FORMAT;
use super::workitems::{WorkItem, WorkItems};
use crate::libs::error::{TrackerError, TrackerResult};
use chrono::NaiveDateTime;
use tracing::debug;

const SEED_WORK_ITEMS: &[(&str, &str)] = &[
    ("AAA-BBB", "Some client"),
    ("AAA-CCC", "Internal project"),
    ("DDD-BBB", "Training"),
    ("CCC-AAA", "Eh"),
    ("AAA-ZZZ", "Testing"),
];

const SEED_ENTRIES: &[(&str, u64, &str, &str)] = &[
    ("AAA-CCC", 60, "something quick", "2023-09-28 00:00:00"),
    ("AAA-BBB", 600, "something longer", "2023-09-28 00:00:00"),
    ("DDD-BBB", 6000, "something longerer", "2023-06-30 00:00:00"),
    ("AAA-ZZZ", 60000, "something longeeeeeer", "2023-06-30 00:00:00"),
];

/// Inserts the demo work items and entries.
///
/// Returns `None` without touching the database when any demo work item is
/// already present, otherwise the number of work items and entries added.
pub fn seed(db: &Db) -> TrackerResult<Option<(usize, usize)>> {
    let work_items = WorkItems::new(db);
    for (id, _) in SEED_WORK_ITEMS {
        if work_items.exists(id)? {
            debug!(id, "demo data already present");
            return Ok(None);
        }
    }

    let items: Vec<WorkItem> = SEED_WORK_ITEMS.iter().map(|(id, label)| WorkItem::new(id, label)).collect();
    let mut entries = Vec::with_capacity(SEED_ENTRIES.len());
    for (workitem, time, desc, timestamp) in SEED_ENTRIES {
        let timestamp = NaiveDateTime::parse_from_str(timestamp, DATETIME_FORMAT)
            .map_err(|e| TrackerError::InvalidDate(e.to_string()))?;
        entries.push(TimeEntry::new(workitem, *time, desc).at(timestamp));
    }

    let item_count = work_items.insert(&items)?;
    let entry_count = TimeEntries::new(db).insert_many(&entries)?;

    Ok(Some((item_count, entry_count)))
}
