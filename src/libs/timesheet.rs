//! Timesheet aggregation.
//!
//! A timesheet pivots time entries into a grid: one row per work item, one
//! column per calendar day. Each cell holds the summed hours and the distinct
//! descriptions of the entries that fall into it.
//!
//! ## Algorithm
//!
//! 1. Row axis: distinct work item ids, sorted lexicographically.
//! 2. Column axis: distinct entry dates, sorted chronologically.
//! 3. Entries are bucketed by `(workitem, date)`.
//! 4. Every pair of the cross product becomes a cell, empty buckets
//!    included: `hours = round(sum(seconds) / 3600, 2)` and the comment is the
//!    distinct non-empty descriptions joined in first-seen order, or the
//!    configured placeholder when there are none.
//!
//! Entries without a timestamp cannot be placed on the date axis and are
//! skipped.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use timetrack::db::entries::TimeEntry;
//! use timetrack::libs::config::TimesheetConfig;
//! use timetrack::libs::timesheet::Timesheet;
//!
//! let day = NaiveDate::from_ymd_opt(2023, 9, 28).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let entries = vec![
//!     TimeEntry::new("AAA-BBB", 600, "x").at(day),
//!     TimeEntry::new("AAA-BBB", 3000, "x").at(day),
//! ];
//! let sheet = Timesheet::build(&entries, &TimesheetConfig::default());
//! assert_eq!(sheet.column_labels, vec!["28/09"]);
//! assert_eq!(sheet.rows[0].cells[0].total_hours, 1.0);
//! assert_eq!(sheet.rows[0].cells[0].comment, "x");
//! ```

use crate::db::entries::TimeEntry;
use crate::libs::config::TimesheetConfig;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Write;
use tracing::debug;

const SECONDS_PER_HOUR: f64 = 3600.0;
const FALLBACK_LABEL_FORMAT: &str = "%d/%m";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetCell {
    pub total_hours: f64,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetRow {
    pub workitem: String,
    /// Aligned with [`Timesheet::column_labels`].
    pub cells: Vec<TimesheetCell>,
}

impl TimesheetRow {
    pub fn total_hours(&self) -> f64 {
        round_hours(self.cells.iter().map(|c| c.total_hours).sum())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timesheet {
    pub column_labels: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<TimesheetRow>,
}

#[derive(Default)]
struct Bucket<'e> {
    seconds: u64,
    descriptions: Vec<&'e str>,
}

/// Formats a column label, falling back to `DD/MM` when the configured
/// format string is invalid.
fn date_label(date: NaiveDate, format: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", date.format(format)).is_err() {
        return date.format(FALLBACK_LABEL_FORMAT).to_string();
    }
    label
}

pub(crate) fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

impl Timesheet {
    pub fn build(entries: &[TimeEntry], config: &TimesheetConfig) -> Self {
        let mut workitems: BTreeSet<&str> = BTreeSet::new();
        let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut buckets: HashMap<(&str, NaiveDate), Bucket> = HashMap::new();

        for entry in entries {
            let Some(timestamp) = entry.timestamp else {
                debug!(id = %entry.id, "entry without timestamp left out of timesheet");
                continue;
            };
            let date = timestamp.date();
            workitems.insert(&entry.workitem);
            dates.insert(date);

            let bucket = buckets.entry((entry.workitem.as_str(), date)).or_default();
            bucket.seconds = bucket.seconds.saturating_add(entry.time);
            if !entry.desc.is_empty() && !bucket.descriptions.contains(&entry.desc.as_str()) {
                bucket.descriptions.push(&entry.desc);
            }
        }

        let rows = workitems
            .iter()
            .map(|workitem| TimesheetRow {
                workitem: workitem.to_string(),
                cells: dates
                    .iter()
                    .map(|date| match buckets.get(&(*workitem, *date)) {
                        Some(bucket) => Self::cell(bucket, config),
                        None => TimesheetCell {
                            total_hours: 0.0,
                            comment: config.empty_comment.clone(),
                        },
                    })
                    .collect(),
            })
            .collect();

        Timesheet {
            column_labels: dates
                .iter()
                .map(|d| date_label(*d, &config.date_label_format))
                .collect(),
            dates: dates.into_iter().collect(),
            rows,
        }
    }

    fn cell(bucket: &Bucket, config: &TimesheetConfig) -> TimesheetCell {
        let comment = if bucket.descriptions.is_empty() {
            config.empty_comment.clone()
        } else {
            bucket.descriptions.join(&config.comment_separator)
        };
        TimesheetCell {
            total_hours: round_hours(bucket.seconds as f64 / SECONDS_PER_HOUR),
            comment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell for `workitem` on the column labelled `label`.
    pub fn cell_at(&self, workitem: &str, label: &str) -> Option<&TimesheetCell> {
        let col = self.column_labels.iter().position(|l| l == label)?;
        self.rows.iter().find(|r| r.workitem == workitem)?.cells.get(col)
    }

    /// Hours per column, summed over all rows.
    pub fn column_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.column_labels.len()];
        for row in &self.rows {
            for (total, cell) in totals.iter_mut().zip(&row.cells) {
                *total += cell.total_hours;
            }
        }
        totals.into_iter().map(round_hours).collect()
    }

    pub fn total_hours(&self) -> f64 {
        round_hours(self.rows.iter().map(TimesheetRow::total_hours).sum())
    }
}
