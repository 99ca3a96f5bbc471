/// Every user-facing text of the application.
///
/// Variants carry the values they interpolate; the wording lives in
/// `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseInitialized(String), // path
    DatabaseSeeded(usize, usize), // work items, entries
    DatabaseAlreadySeeded,

    // === WORK ITEM MESSAGES ===
    WorkItemsHeader,
    WorkItemCreated(String),
    WorkItemUpdated(String),
    WorkItemUnchanged(String),
    WorkItemDeleted(String),
    WorkItemNotFound(String),
    WorkItemAlreadyExists(String),
    NoWorkItemsFound,
    ConfirmDeleteWorkItem(String, usize), // id, entries still referencing it
    PromptWorkItemId,
    PromptWorkItemLabel,
    SelectWorkItemAction,
    SelectWorkItem,

    // === TIME ENTRY MESSAGES ===
    EntriesHeader(String), // date
    NoEntriesForDate(String),
    EntryAdded(String, String), // work item, duration
    EntryUpdated(String),
    EntryUnchanged(String),
    EntryDeleted(String),
    EntryNotFound(String),
    NothingDeleted(String),
    ConfirmDeleteEntry(String),

    // === TIMER MESSAGES ===
    TimerStarted(String),          // work item
    TimerStopped(String, String),  // work item, duration
    TimerCancelled(String),
    TimerRunningHeader,
    NoTimerRunning,
    MissingDescription,

    // === TIMESHEET MESSAGES ===
    TimesheetHeader(String, String), // start, end
    TimesheetEmpty(String, String),
    TimesheetExported(String), // path
    InvalidDateRange(String, String),

    // === GENERIC MESSAGES ===
    InvalidDate(String),
    InvalidTimeFormat(String),
    OperationCancelled,
}
