//! Wording of every [`Message`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseInitialized(path) => format!("Database ready at {}", path),
            Message::DatabaseSeeded(items, entries) => format!("Added {} demo work items and {} demo entries", items, entries),
            Message::DatabaseAlreadySeeded => "Demo data is already present, nothing added".to_string(),

            // === WORK ITEM MESSAGES ===
            Message::WorkItemsHeader => "Work items:".to_string(),
            Message::WorkItemCreated(id) => format!("Work item '{}' created", id),
            Message::WorkItemUpdated(id) => format!("Work item '{}' updated", id),
            Message::WorkItemUnchanged(id) => format!("Work item '{}' left unchanged", id),
            Message::WorkItemDeleted(id) => format!("Work item '{}' deleted", id),
            Message::WorkItemNotFound(id) => format!("Work item '{}' not found", id),
            Message::WorkItemAlreadyExists(id) => format!("Work item '{}' already exists", id),
            Message::NoWorkItemsFound => "No work items yet. Add one with 'timetrack workitem add <ID> <LABEL>'".to_string(),
            Message::ConfirmDeleteWorkItem(id, 0) => format!("Delete work item '{}'?", id),
            Message::ConfirmDeleteWorkItem(id, count) => {
                format!("Work item '{}' still has {} time entries. Delete it anyway?", id, count)
            }
            Message::PromptWorkItemId => "Work item ID".to_string(),
            Message::PromptWorkItemLabel => "Label".to_string(),
            Message::SelectWorkItemAction => "What do you want to do?".to_string(),
            Message::SelectWorkItem => "Select a work item".to_string(),

            // === TIME ENTRY MESSAGES ===
            Message::EntriesHeader(date) => format!("Time entries for {}", date),
            Message::NoEntriesForDate(date) => format!("No time entries for {}", date),
            Message::EntryAdded(workitem, duration) => format!("Recorded {} on '{}'", duration, workitem),
            Message::EntryUpdated(id) => format!("Entry {} updated", id),
            Message::EntryUnchanged(id) => format!("Nothing to change for entry {}", id),
            Message::EntryDeleted(id) => format!("Entry {} deleted", id),
            Message::EntryNotFound(id) => format!("Entry {} not found", id),
            Message::NothingDeleted(id) => format!("No entry with id {}, nothing deleted", id),
            Message::ConfirmDeleteEntry(id) => format!("Delete entry {}?", id),

            // === TIMER MESSAGES ===
            Message::TimerStarted(workitem) => format!("Timer started on '{}'", workitem),
            Message::TimerStopped(workitem, duration) => format!("Timer stopped: {} on '{}'", duration, workitem),
            Message::TimerCancelled(workitem) => format!("Timer on '{}' discarded", workitem),
            Message::TimerRunningHeader => "Running timer:".to_string(),
            Message::NoTimerRunning => "No timer is running".to_string(),
            Message::MissingDescription => "A description is required".to_string(),

            // === TIMESHEET MESSAGES ===
            Message::TimesheetHeader(start, end) => format!("Timesheet {} to {}", start, end),
            Message::TimesheetEmpty(start, end) => format!("No time entries between {} and {}", start, end),
            Message::TimesheetExported(path) => format!("Timesheet exported to {}", path),
            Message::InvalidDateRange(start, end) => format!("Start date {} is after end date {}", start, end),

            // === GENERIC MESSAGES ===
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", date),
            Message::InvalidTimeFormat(time) => format!("Invalid time '{}', expected HH:MM:SS", time),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
