#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use super::{Formatter, format_timestamp};
use crate::record::UserSummary;
use chrono::{DateTime, Utc};
use std::io;
use termcolor::{ColorSpec, WriteColor};

/// Human-readable output formatter
///
/// Each user renders as a four-line block followed by a blank line. Color only
/// bolds the `User:` header; the text is identical either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the current-time banner as plain text
    pub fn format_clock(&self, now: &DateTime<Utc>) -> String {
        format!("Current time: {}\n\n", format_timestamp(now))
    }
}

impl Formatter for HumanFormatter {
    fn write_clock(&self, out: &mut dyn WriteColor, now: &DateTime<Utc>) -> io::Result<()> {
        out.write_all(self.format_clock(now).as_bytes())
    }

    fn write_user(&self, out: &mut dyn WriteColor, user: &UserSummary<'_>) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "User:")?;
        out.reset()?;
        writeln!(out, " {}", user.username)?;
        writeln!(
            out,
            "* Account created:\t{}",
            format_timestamp(&user.account_created)
        )?;
        writeln!(
            out,
            "* Last time active:\t{}",
            format_timestamp(&user.last_active)
        )?;
        writeln!(out, "* Current location:\t{}", user.world_location)?;
        writeln!(out)
    }
}
