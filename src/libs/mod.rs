//! Application services shared by the commands.
//!
//! - **Time math**: [`clock`] and [`timesheet`]
//! - **State**: [`config`], [`data_storage`] and [`timer`]
//! - **Output**: [`messages`], [`view`] and [`export`]

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod timer;
pub mod timesheet;
pub mod view;
