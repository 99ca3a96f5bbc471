//! Timesheet command.
//!
//! Loads the entries of a date range and pivots them into one row per work
//! item and one column per day. The result is printed as a table or written
//! to a CSV or JSON file.

use crate::{
    commands::parse_date,
    db::{db::Db, entries::TimeEntries},
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        timesheet::Timesheet,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Args)]
pub struct TimesheetArgs {
    /// First day (YYYY-MM-DD, 'today' or 'yesterday')
    #[arg(long, short)]
    start: String,

    /// Last day, included
    #[arg(long, short, default_value = "today")]
    end: String,

    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output file for csv and json
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn cmd(args: TimesheetArgs, db: &Db) -> Result<()> {
    let start = parse_date(&args.start)?;
    let end = parse_date(&args.end)?;
    if start > end {
        msg_bail_anyhow!(Message::InvalidDateRange(args.start, args.end));
    }

    let entries = TimeEntries::new(db).fetch_range(start, end)?;
    debug!(entries = entries.len(), %start, %end, "building timesheet");

    let config = Config::read()?;
    let timesheet = Timesheet::build(&entries, &config.timesheet);
    let (start, end) = (start.to_string(), end.to_string());

    if timesheet.is_empty() {
        msg_info!(Message::TimesheetEmpty(start, end));
        return Ok(());
    }

    let export_format = match args.format {
        OutputFormat::Table => {
            msg_print!(Message::TimesheetHeader(start, end), true);
            View::timesheet(&timesheet);
            return Ok(());
        }
        OutputFormat::Json => ExportFormat::Json,
        OutputFormat::Csv => ExportFormat::Csv,
    };

    let exporter = Exporter::new(export_format, args.output);
    exporter.export(&timesheet)?;
    msg_success!(Message::TimesheetExported(exporter.output_path().display().to_string()));
    Ok(())
}
