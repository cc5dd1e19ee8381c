#![forbid(unsafe_code)]

//! Command dispatch
//!
//! Maps the selected [`Command`] onto the record store. Listing commands print
//! the clock line before touching the users file and stream records as they
//! are validated, so a bad record aborts the command after the records
//! preceding it were printed. `--userdel` always saves, even when nothing
//! matched, and prints nothing.

use super::args::{Cli, Command};
use crate::config::{ColorOption, Config, OutputFormat};
use crate::error::{Error, Result};
use crate::output::{Formatter, HumanFormatter, JsonlFormatter};
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use termcolor::WriteColor;

/// Effective settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub users_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorOption,
}

impl Settings {
    /// Flags win over the config file
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Settings {
            users_file: cli
                .file
                .clone()
                .unwrap_or_else(|| config.store.path.clone()),
            output_file: cli.output.clone(),
            format: cli.format.unwrap_or(config.output.format),
            color: cli.color.unwrap_or(config.output.color),
        }
    }
}

/// Runs commands against one users file
pub struct Dispatcher {
    store: RecordStore,
    formatter: Box<dyn Formatter>,
    output_file: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(settings: &Settings) -> Self {
        let formatter: Box<dyn Formatter> = match settings.format {
            OutputFormat::Human => Box::new(HumanFormatter::new()),
            OutputFormat::Jsonl => Box::new(JsonlFormatter::new()),
        };
        Dispatcher {
            store: RecordStore::new(&settings.users_file),
            formatter,
            output_file: settings.output_file.clone(),
        }
    }

    /// Runs `command`, writing any listing to `out`
    ///
    /// `now` is the time shown in the clock line.
    pub fn run(
        &mut self,
        command: &Command,
        now: DateTime<Utc>,
        out: &mut dyn WriteColor,
    ) -> Result<()> {
        match command {
            Command::List => self.list(now, out),
            Command::UserInfo(names) => self.user_info(names, now, out),
            Command::UserDel(names) => self.user_del(names),
        }
    }

    fn list(&mut self, now: DateTime<Utc>, out: &mut dyn WriteColor) -> Result<()> {
        self.formatter.write_clock(out, &now)?;
        let document = self.store.load()?;
        for (index, user) in document.users.iter().enumerate() {
            self.formatter.write_user(out, &user.summary(index)?)?;
        }
        Ok(())
    }

    fn user_info(
        &mut self,
        names: &[String],
        now: DateTime<Utc>,
        out: &mut dyn WriteColor,
    ) -> Result<()> {
        self.formatter.write_clock(out, &now)?;
        let document = self.store.load()?;
        let mut shown = 0;
        for item in document.matching(names) {
            let (index, user) = item?;
            self.formatter.write_user(out, &user.summary(index)?)?;
            shown += 1;
        }
        log::debug!("{} of {} requested user(s) found", shown, names.len());
        Ok(())
    }

    fn user_del(&mut self, names: &[String]) -> Result<()> {
        let removed = self.store.load()?.remove_users(names)?;
        self.store.save(self.output_file.as_deref())?;
        log::info!(
            "removed {} user record(s) from {}",
            removed,
            self.output_file
                .as_deref()
                .unwrap_or(self.store.path())
                .display()
        );
        Ok(())
    }
}

/// Works out the command and effective settings for an invocation
///
/// The config file is looked up in `cwd` unless `--config` names one.
pub fn prepare(cli: &Cli, cwd: &Path) -> Result<(Command, Settings)> {
    let command = cli.selected_command().ok_or(Error::UnknownCommand)?;
    let config = Config::discover(cli.config.as_deref(), cwd)?;
    Ok((command, Settings::resolve(cli, &config)))
}
