#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line: a clock record first, then one user
//! record per listed user in document order.

use super::{Formatter, format_timestamp};
use crate::record::UserSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use termcolor::WriteColor;

/// JSONL output formatter
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    fn write_line<T: Serialize>(out: &mut dyn WriteColor, record: &T) -> io::Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(out, "{}", json)
    }
}

impl Formatter for JsonlFormatter {
    fn write_clock(&self, out: &mut dyn WriteColor, now: &DateTime<Utc>) -> io::Result<()> {
        Self::write_line(
            out,
            &ClockRecord {
                record_type: "clock",
                current_time: format_timestamp(now),
                timestamp: now.timestamp(),
            },
        )
    }

    fn write_user(&self, out: &mut dyn WriteColor, user: &UserSummary<'_>) -> io::Result<()> {
        Self::write_line(
            out,
            &UserLine {
                record_type: "user",
                username: user.username,
                account_created: format_timestamp(&user.account_created),
                last_active: format_timestamp(&user.last_active),
                location: user.world_location,
            },
        )
    }
}

/// Clock record for JSONL output
#[derive(Debug, Serialize)]
struct ClockRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    current_time: String,
    timestamp: i64,
}

/// User record for JSONL output
#[derive(Debug, Serialize)]
struct UserLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    username: &'a str,
    account_created: String,
    last_active: String,
    location: &'a str,
}
