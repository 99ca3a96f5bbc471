use crate::{
    db::{
        db::Db,
        entries::{TimeEntries, TimeEntry},
        workitems::WorkItems,
    },
    libs::{
        clock::{clock_to_seconds, seconds_to_clock},
        messages::Message,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Records time that was not tracked with the timer.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Work item the time is booked on
    workitem: String,

    /// Duration as HH:MM:SS
    time: String,

    /// What was done
    #[arg(num_args = 1.., trailing_var_arg = true, required = true)]
    description: Vec<String>,
}

pub fn cmd(args: AddArgs, db: &Db) -> Result<()> {
    let description = args.description.join(" ");
    if description.trim().is_empty() {
        msg_bail_anyhow!(Message::MissingDescription);
    }
    let seconds = clock_to_seconds(&args.time).map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(args.time.clone())))?;
    if !WorkItems::new(db).exists(&args.workitem)? {
        msg_bail_anyhow!(Message::WorkItemNotFound(args.workitem));
    }

    TimeEntries::new(db).insert(&TimeEntry::new(&args.workitem, seconds, description.trim()))?;

    msg_success!(Message::EntryAdded(args.workitem, seconds_to_clock(seconds)));
    Ok(())
}
