#![forbid(unsafe_code)]

//! Command-line arguments

use crate::config::{ColorOption, OutputFormat};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Administration tool for the Mudnix user registry
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mudnix-mgr")]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .args(["list", "userinfo", "userdel"])
))]
pub struct Cli {
    /// Print every user record
    #[arg(long)]
    pub list: bool,

    /// Print the records of the named users
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub userinfo: Option<Vec<String>>,

    /// Delete the named users and save the registry
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub userdel: Option<Vec<String>>,

    /// Users file to operate on [default: users.json]
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the registry here instead of overwriting the users file
    #[arg(long, value_name = "PATH", conflicts_with_all = ["list", "userinfo"])]
    pub output: Option<PathBuf>,

    /// Listing format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorOption>,

    /// Configuration file [default: ./mudnix-mgr.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// The operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every record
    List,
    /// Print records whose username is in the list
    UserInfo(Vec<String>),
    /// Remove records whose username is in the list
    UserDel(Vec<String>),
}

impl Cli {
    /// The operation to run, if one was selected
    pub fn selected_command(&self) -> Option<Command> {
        if self.list {
            Some(Command::List)
        } else if let Some(names) = &self.userinfo {
            Some(Command::UserInfo(names.clone()))
        } else {
            self.userdel.as_ref().map(|names| Command::UserDel(names.clone()))
        }
    }
}
