//! Daily table of time entries.

use crate::{
    commands::parse_date,
    db::{db::Db, entries::TimeEntries},
    libs::{messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{NaiveDate, TimeDelta};
use clap::Args;

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Day to show (YYYY-MM-DD, 'today' or 'yesterday')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Go back this many days from --date
    #[arg(long, short, default_value_t = 0)]
    offset: i64,
}

pub fn cmd(args: TableArgs, db: &Db) -> Result<()> {
    let date = offset_date(parse_date(&args.date)?, args.offset)?;
    let entries = TimeEntries::new(db).fetch_day(date)?;
    let label = date.format("%A, %B %-d, %Y").to_string();

    if entries.is_empty() {
        msg_info!(Message::NoEntriesForDate(label));
        return Ok(());
    }

    msg_print!(Message::EntriesHeader(label), true);
    View::entries(&entries);
    Ok(())
}

/// `date` moved back by `offset` days. Offsets past the calendar range are an
/// invalid date.
pub fn offset_date(date: NaiveDate, offset: i64) -> Result<NaiveDate> {
    TimeDelta::try_days(offset)
        .and_then(|delta| date.checked_sub_signed(delta))
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(format!("{} - {} days", date, offset))))
}
