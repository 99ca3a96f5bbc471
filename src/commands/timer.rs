//! Timer commands: `start`, `stop`, `status` and `cancel`.
//!
//! A timer only becomes a time entry when it is stopped. Starting requires a
//! known work item and a non-blank description.

use crate::{
    db::{
        db::Db,
        entries::{TimeEntries, TimeEntry},
        workitems::WorkItems,
    },
    libs::{clock::seconds_to_clock, messages::Message, timer::Timer, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Work item the time is booked on
    workitem: String,

    /// What you are working on
    #[arg(num_args = 0.., trailing_var_arg = true)]
    description: Vec<String>,
}

pub fn start(args: StartArgs, db: &Db) -> Result<()> {
    let description = args.description.join(" ");
    if description.trim().is_empty() {
        msg_bail_anyhow!(Message::MissingDescription);
    }
    if !WorkItems::new(db).exists(&args.workitem)? {
        msg_bail_anyhow!(Message::WorkItemNotFound(args.workitem));
    }

    let timer = Timer::new()?.start(&args.workitem, &description, Local::now().naive_local())?;
    msg_success!(Message::TimerStarted(timer.workitem));
    Ok(())
}

pub fn stop(db: &Db) -> Result<()> {
    let timer = Timer::new()?;
    let Some(running) = timer.current()? else {
        msg_bail_anyhow!(Message::NoTimerRunning);
    };

    // The timer file is only cleared once the entry is stored.
    let now = Local::now().naive_local();
    let elapsed = running.elapsed(now);
    TimeEntries::new(db).insert(&TimeEntry::new(&running.workitem, elapsed, &running.desc))?;
    timer.stop(now)?;

    msg_success!(Message::TimerStopped(running.workitem, seconds_to_clock(elapsed)));
    Ok(())
}

pub fn status() -> Result<()> {
    match Timer::new()?.current()? {
        Some(running) => {
            let elapsed = running.elapsed(Local::now().naive_local());
            msg_print!(Message::TimerRunningHeader, true);
            View::timer(&running, elapsed);
        }
        None => msg_info!(Message::NoTimerRunning),
    }
    Ok(())
}

pub fn cancel() -> Result<()> {
    match Timer::new()?.cancel()? {
        Some(running) => msg_success!(Message::TimerCancelled(running.workitem)),
        None => msg_info!(Message::NoTimerRunning),
    }
    Ok(())
}
