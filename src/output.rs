//! Output formatters for user listings

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::record::UserSummary;
use chrono::{DateTime, Utc};
use std::io;
use termcolor::WriteColor;

/// Timestamp layout used everywhere a time is shown to the operator
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders a UTC time as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Writes the pieces of a listing: the clock line, then one entry per user
pub trait Formatter {
    fn write_clock(&self, out: &mut dyn WriteColor, now: &DateTime<Utc>) -> io::Result<()>;

    fn write_user(&self, out: &mut dyn WriteColor, user: &UserSummary<'_>) -> io::Result<()>;
}
