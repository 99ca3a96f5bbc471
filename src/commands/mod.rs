pub mod add;
pub mod entry;
pub mod init;
pub mod table;
pub mod timer;
pub mod timesheet;
pub mod workitem;

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the database tables, optionally with demo data")]
    Init(init::InitArgs),
    #[command(about = "Start a timer on a work item")]
    Start(timer::StartArgs),
    #[command(about = "Stop the running timer and record the entry")]
    Stop,
    #[command(about = "Show the running timer")]
    Status,
    #[command(about = "Discard the running timer without recording it")]
    Cancel,
    #[command(about = "Record a time entry directly")]
    Add(add::AddArgs),
    #[command(about = "Show the time entries of a day")]
    Table(table::TableArgs),
    #[command(about = "Edit, delete or show a time entry")]
    Entry(entry::EntryArgs),
    #[command(about = "Manage work items")]
    Workitem(workitem::WorkItemArgs),
    #[command(about = "Build a timesheet for a date range")]
    Timesheet(timesheet::TimesheetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let db_path = cli.db;
        let open = || open_db(db_path.as_ref());

        match cli.command {
            Commands::Init(args) => init::cmd(args, &open()?),
            Commands::Start(args) => timer::start(args, &open()?),
            Commands::Stop => timer::stop(&open()?),
            Commands::Status => timer::status(),
            Commands::Cancel => timer::cancel(),
            Commands::Add(args) => add::cmd(args, &open()?),
            Commands::Table(args) => table::cmd(args, &open()?),
            Commands::Entry(args) => entry::cmd(args, &open()?),
            Commands::Workitem(args) => workitem::cmd(args, &open()?),
            Commands::Timesheet(args) => timesheet::cmd(args, &open()?),
        }
    }
}

fn open_db(path: Option<&PathBuf>) -> Result<Db> {
    let db = match path {
        Some(path) => Db::open(path)?,
        None => Db::new()?,
    };
    Ok(db)
}

/// Parses `today`, `yesterday` or a `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    match date_str.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - chrono::Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string()))),
    }
}
