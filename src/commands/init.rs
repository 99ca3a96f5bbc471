//! Database initialization command.
//!
//! Opening the database already creates the `workitems` and `entries` tables
//! when they are missing, so this command mostly reports where the data
//! lives. With `--seed` it also loads a small demo data set.

use crate::{
    db::{db::Db, seed},
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Insert demo work items and time entries
    #[arg(long)]
    seed: bool,

    /// Write the default configuration file if none exists
    #[arg(long)]
    config: bool,
}

pub fn cmd(args: InitArgs, db: &Db) -> Result<()> {
    db.create_tables()?;
    let path = db.conn.path().map(str::to_string).unwrap_or_else(|| ":memory:".to_string());
    msg_success!(Message::DatabaseInitialized(path));

    if args.config {
        Config::read()?.save()?;
    }

    if args.seed {
        match seed::seed(db)? {
            Some((items, entries)) => msg_success!(Message::DatabaseSeeded(items, entries)),
            None => msg_info!(Message::DatabaseAlreadySeeded),
        }
    }

    Ok(())
}
