//! Typed connection-profile documents.
//!
//! NetworkManager accepts connection settings as a nested dictionary
//! (`a{sa{sv}}`): setting group name, then key, then variant value.
//! `ConnectionProfile` is the strongly-typed form of that document. Groups
//! and keys keep their insertion order so profile construction stays
//! deterministic; the wire format itself is a dictionary, so ordering only
//! matters for inspection and tests.

use std::collections::HashMap;
use zvariant::Value;

use crate::models::ConnectionError;

/// A single typed value inside a setting group.
///
/// Only the wire kinds this client actually emits: strings, booleans, and
/// byte sequences (SSIDs are raw bytes on the wire, one byte per UTF-8
/// code unit, with no length prefix or terminator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Str(String),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    fn to_value(&self) -> Value<'static> {
        match self {
            Self::Str(s) => Value::from(s.clone()),
            Self::Bool(b) => Value::from(*b),
            Self::Bytes(b) => Value::from(b.clone()),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<u8>> for SettingValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

/// An ordered list of key/value entries under one setting group name.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingGroup {
    name: String,
    entries: Vec<(String, SettingValue)>,
}

impl SettingGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A complete connection-settings document, ready for registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionProfile {
    groups: Vec<SettingGroup>,
}

impl ConnectionProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a setting group. Group order is preserved.
    pub fn with_group<'k, I>(mut self, name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'k str, SettingValue)>,
    {
        self.groups.push(SettingGroup {
            name: name.to_string(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        });
        self
    }

    pub fn group(&self, name: &str) -> Option<&SettingGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn groups(&self) -> impl Iterator<Item = &SettingGroup> {
        self.groups.iter()
    }

    /// Looks up a single value by group and key.
    pub fn get(&self, group: &str, key: &str) -> Option<&SettingValue> {
        self.group(group)?.get(key)
    }

    /// The `connection.id` of this profile, if set.
    pub fn id(&self) -> Option<&str> {
        self.get("connection", "id")?.as_str()
    }

    /// Checks the structural requirements NetworkManager imposes on every
    /// profile: a `connection` group with a non-empty `id` and `type`.
    ///
    /// Builders call this before returning, so a profile is never handed to
    /// the transport in an invalid shape.
    pub fn ensure_valid(&self) -> Result<(), ConnectionError> {
        let conn = self
            .group("connection")
            .ok_or_else(|| ConnectionError::InvalidProfile("missing 'connection' group".into()))?;

        match conn.get("id").and_then(SettingValue::as_str) {
            Some(id) if !id.is_empty() => {}
            _ => {
                return Err(ConnectionError::InvalidProfile(
                    "missing or empty 'connection.id'".into(),
                ));
            }
        }

        match conn.get("type").and_then(SettingValue::as_str) {
            Some(ty) if !ty.is_empty() => {}
            _ => {
                return Err(ConnectionError::InvalidProfile(
                    "missing or empty 'connection.type'".into(),
                ));
            }
        }

        Ok(())
    }

    /// Converts to the `a{sa{sv}}` dictionary zbus serializes for
    /// `AddConnection`.
    pub(crate) fn to_dbus(&self) -> HashMap<&str, HashMap<&str, Value<'static>>> {
        self.groups
            .iter()
            .map(|g| {
                let entries = g
                    .entries
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.to_value()))
                    .collect();
                (g.name.as_str(), entries)
            })
            .collect()
    }
}
