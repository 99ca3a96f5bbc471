//! # Timetrack - personal time tracking
//!
//! A command-line time tracker that books durations on work items and turns
//! them into timesheets.
//!
//! ## Features
//!
//! - **Work Items**: Codes such as `AAA-BBB` that time is booked on
//! - **Timer**: Start and stop a running timer, or add entries by hand
//! - **Timesheets**: One row per work item, one column per day, exportable
//!   to CSV and JSON
//! - **Record Store**: Schema-checked SQLite access shared by all tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
