use crate::{
    db::{
        db::Db,
        entries::TimeEntries,
        workitems::{WorkItem, WorkItems},
    },
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct WorkItemArgs {
    #[command(subcommand)]
    command: Option<WorkItemCommand>,
}

#[derive(Debug, Subcommand)]
enum WorkItemCommand {
    /// List all work items
    List,
    /// Create a work item
    Add {
        /// Work item code, e.g. AAA-BBB
        id: String,
        /// Human readable label
        #[arg(num_args = 1.., trailing_var_arg = true, required = true)]
        label: Vec<String>,
    },
    /// Change the label of a work item
    Edit {
        id: String,
        /// New label; prompted for when omitted
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Delete a work item
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show one work item
    Show { id: String },
}

pub fn cmd(args: WorkItemArgs, db: &Db) -> Result<()> {
    match args.command {
        Some(WorkItemCommand::List) => handle_list(db),
        Some(WorkItemCommand::Add { id, label }) => handle_add(db, id, label.join(" ")),
        Some(WorkItemCommand::Edit { id, label }) => handle_edit(db, id, label),
        Some(WorkItemCommand::Delete { id, yes }) => handle_delete(db, id, yes),
        Some(WorkItemCommand::Show { id }) => handle_show(db, id),
        None => handle_interactive(db),
    }
}

fn handle_list(db: &Db) -> Result<()> {
    let items = WorkItems::new(db).list()?;

    if items.is_empty() {
        msg_info!(Message::NoWorkItemsFound);
        return Ok(());
    }

    msg_print!(Message::WorkItemsHeader, true);
    View::work_items(&items);
    Ok(())
}

fn handle_add(db: &Db, id: String, label: String) -> Result<()> {
    let work_items = WorkItems::new(db);

    if work_items.exists(&id)? {
        msg_error!(Message::WorkItemAlreadyExists(id));
        return Ok(());
    }

    work_items.insert(&[WorkItem::new(&id, label.trim())])?;
    msg_success!(Message::WorkItemCreated(id));
    Ok(())
}

fn handle_edit(db: &Db, id: String, label: Option<String>) -> Result<()> {
    let work_items = WorkItems::new(db);

    let Some(item) = work_items.get(&id)? else {
        msg_error!(Message::WorkItemNotFound(id));
        return Ok(());
    };

    let label = match label {
        Some(label) => label,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkItemLabel.to_string())
            .default(item.label.clone())
            .interact_text()?,
    };

    let label = label.trim();
    if label.is_empty() || label == item.label {
        msg_info!(Message::WorkItemUnchanged(id));
        return Ok(());
    }

    work_items.update_label(&id, Some(label))?;
    msg_success!(Message::WorkItemUpdated(id));
    Ok(())
}

fn handle_delete(db: &Db, id: String, yes: bool) -> Result<()> {
    let work_items = WorkItems::new(db);

    if !work_items.exists(&id)? {
        msg_error!(Message::WorkItemNotFound(id));
        return Ok(());
    }

    // Entries keep their work item code after the item itself is gone.
    let entry_count = TimeEntries::new(db).count_for_workitem(&id)?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteWorkItem(id.clone(), entry_count).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if work_items.delete(&id)? == 0 {
        msg_info!(Message::NothingDeleted(id));
    } else {
        msg_success!(Message::WorkItemDeleted(id));
    }
    Ok(())
}

fn handle_show(db: &Db, id: String) -> Result<()> {
    match WorkItems::new(db).get(&id)? {
        Some(item) => View::work_items(&[item]),
        None => msg_error!(Message::WorkItemNotFound(id)),
    }
    Ok(())
}

fn handle_interactive(db: &Db) -> Result<()> {
    let options = vec!["List work items", "Add work item", "Edit work item", "Delete work item"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectWorkItemAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_list(db),
        1 => {
            let id: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkItemId.to_string())
                .interact_text()?;
            let label: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkItemLabel.to_string())
                .interact_text()?;
            handle_add(db, id.trim().to_string(), label)
        }
        2 => match select_work_item(db)? {
            Some(id) => handle_edit(db, id, None),
            None => Ok(()),
        },
        3 => match select_work_item(db)? {
            Some(id) => handle_delete(db, id, false),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn select_work_item(db: &Db) -> Result<Option<String>> {
    let ids = WorkItems::new(db).ids()?;
    if ids.is_empty() {
        msg_info!(Message::NoWorkItemsFound);
        return Ok(None);
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectWorkItem.to_string())
        .items(&ids)
        .interact()?;
    Ok(ids.into_iter().nth(selection))
}
