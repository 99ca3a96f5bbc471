use crate::{
    db::{db::Db, entries::TimeEntries},
    libs::{clock::clock_to_seconds, messages::Message, view::View},
    msg_error, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[command(subcommand)]
    command: EntryCommand,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Show one entry
    Show { id: String },
    /// Change the description or duration of an entry
    Edit {
        id: String,
        /// New description
        #[arg(short, long)]
        desc: Option<String>,
        /// New duration as HH:MM:SS
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Delete an entry
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: EntryArgs, db: &Db) -> Result<()> {
    match args.command {
        EntryCommand::Show { id } => handle_show(db, id),
        EntryCommand::Edit { id, desc, time } => handle_edit(db, id, desc, time),
        EntryCommand::Delete { id, yes } => handle_delete(db, id, yes),
    }
}

fn handle_show(db: &Db, id: String) -> Result<()> {
    match TimeEntries::new(db).get(&id)? {
        Some(entry) => View::entries(&[entry]),
        None => msg_error!(Message::EntryNotFound(id)),
    }
    Ok(())
}

fn handle_edit(db: &Db, id: String, desc: Option<String>, time: Option<String>) -> Result<()> {
    let entries = TimeEntries::new(db);

    let Some(current) = entries.get(&id)? else {
        msg_error!(Message::EntryNotFound(id));
        return Ok(());
    };

    let time = time
        .map(|t| clock_to_seconds(&t).map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(t.clone()))))
        .transpose()?;
    let desc = desc.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());

    let desc = desc.filter(|d| *d != current.desc);
    let time = time.filter(|t| *t != current.time);

    if entries.update(&id, desc.as_deref(), time)? == 0 {
        msg_info!(Message::EntryUnchanged(id));
    } else {
        msg_success!(Message::EntryUpdated(id));
    }
    Ok(())
}

fn handle_delete(db: &Db, id: String, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(id.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if TimeEntries::new(db).delete(&id)? == 0 {
        msg_info!(Message::NothingDeleted(id));
    } else {
        msg_success!(Message::EntryDeleted(id));
    }
    Ok(())
}
