#![forbid(unsafe_code)]

//! mudnix-mgr: administration tool for the Mudnix user registry
//!
//! The registry is a single JSON document (`users.json`) holding an ordered
//! list of user records. The tool lists records, shows selected users, and
//! deletes users by name. It assumes a single trusted operator: there is no
//! locking, and concurrent writers race with last-writer-wins semantics.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod store;

pub use error::{Error, Result};
