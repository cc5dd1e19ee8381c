#![forbid(unsafe_code)]

//! Registry document and user record types
//!
//! The users file is shared with the game server, which stores more per-user
//! state than this tool understands (password hashes, inventories, treasure
//! chests). Records are therefore kept as whole JSON objects so a rewrite by
//! `--userdel` never drops fields. Typed access goes through the accessors
//! below, which fail loudly on absent or mistyped fields.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const USERNAME: &str = "username";
pub const ACCOUNT_CREATION_TIMESTAMP: &str = "account_creation_timestamp";
pub const LAST_ACTIVITY_TIMESTAMP: &str = "last_activity_timestamp";
pub const WORLD_LOCATION: &str = "world_location";

/// The whole persisted registry: an ordered list of user records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub users: Vec<UserRecord>,
    /// Top-level fields other than `users`, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One user's stored attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    fields: Map<String, Value>,
}

/// The four fields the admin tool displays, validated and typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary<'a> {
    pub username: &'a str,
    pub account_created: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub world_location: &'a str,
}

impl RegistryDocument {
    pub fn new(users: Vec<UserRecord>) -> Self {
        RegistryDocument {
            users,
            extra: Map::new(),
        }
    }

    /// Returns true if any record carries this exact username
    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username() == Some(username))
    }

    /// Iterates over the records whose username is one of `names`
    ///
    /// Records come back in document order together with their index. Every
    /// record with a matching username is yielded, duplicates included. A
    /// record without a username yields an error at its position, so
    /// callers streaming output see everything before the bad record.
    pub fn matching<'a>(
        &'a self,
        names: &'a [String],
    ) -> impl Iterator<Item = Result<(usize, &'a UserRecord)>> + 'a {
        self.users
            .iter()
            .enumerate()
            .filter_map(move |(index, user)| match user.match_username(index) {
                Ok(Some(username)) if names.iter().any(|name| name == username) => {
                    Some(Ok((index, user)))
                }
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Drops every record whose username is one of `names`
    ///
    /// Survivors keep their relative order. Returns the number of records
    /// removed. If any record lacks a username the document is left as it was.
    pub fn remove_users(&mut self, names: &[String]) -> Result<usize> {
        let mut keep = Vec::with_capacity(self.users.len());
        for (index, user) in self.users.iter().enumerate() {
            let matched = match user.match_username(index)? {
                Some(username) => names.iter().any(|name| name == username),
                None => false,
            };
            keep.push(!matched);
        }

        let before = self.users.len();
        let mut flags = keep.into_iter();
        self.users.retain(|_| flags.next().unwrap_or(true));
        Ok(before - self.users.len())
    }
}

impl UserRecord {
    /// Builds a record with the four fields the admin tool knows about
    pub fn new(
        username: &str,
        account_creation_timestamp: i64,
        last_activity_timestamp: i64,
        world_location: &str,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert(USERNAME.to_string(), Value::from(username));
        fields.insert(
            ACCOUNT_CREATION_TIMESTAMP.to_string(),
            Value::from(account_creation_timestamp),
        );
        fields.insert(
            LAST_ACTIVITY_TIMESTAMP.to_string(),
            Value::from(last_activity_timestamp),
        );
        fields.insert(WORLD_LOCATION.to_string(), Value::from(world_location));
        UserRecord { fields }
    }

    /// Wraps an arbitrary JSON object as a record
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        UserRecord { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The username if present and a string
    pub fn username(&self) -> Option<&str> {
        self.fields.get(USERNAME).and_then(Value::as_str)
    }

    /// The username to compare against requested names
    ///
    /// An absent field is an error. A non-string value never matches any name.
    fn match_username(&self, index: usize) -> Result<Option<&str>> {
        Ok(self.require(USERNAME, index)?.as_str())
    }

    /// Validates and extracts all displayed fields
    pub fn summary(&self, index: usize) -> Result<UserSummary<'_>> {
        Ok(UserSummary {
            username: self.require_str(USERNAME, index)?,
            account_created: self.require_timestamp(ACCOUNT_CREATION_TIMESTAMP, index)?,
            last_active: self.require_timestamp(LAST_ACTIVITY_TIMESTAMP, index)?,
            world_location: self.require_str(WORLD_LOCATION, index)?,
        })
    }

    fn require(&self, field: &'static str, index: usize) -> Result<&Value> {
        self.fields
            .get(field)
            .ok_or(Error::FieldMissing { field, index })
    }

    fn require_str(&self, field: &'static str, index: usize) -> Result<&str> {
        let value = self.require(field, index)?;
        value.as_str().ok_or_else(|| Error::InvalidField {
            field,
            index,
            reason: format!("expected a string, found {}", value),
        })
    }

    fn require_timestamp(&self, field: &'static str, index: usize) -> Result<DateTime<Utc>> {
        let value = self.require(field, index)?;
        let seconds = value.as_i64().ok_or_else(|| Error::InvalidField {
            field,
            index,
            reason: format!("expected integer seconds since the epoch, found {}", value),
        })?;
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| Error::InvalidField {
            field,
            index,
            reason: format!("timestamp {} is out of range", seconds),
        })
    }
}
