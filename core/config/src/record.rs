//! Global and per-vault configuration records.
//!
//! Decoding is lenient about absence: a field that is missing or `null`
//! takes its zero value (empty string, empty list). Only a value of the
//! wrong shape is an error.

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use secretkeep_common::Resource;

/// Format version written into new global configs.
pub const CONFIG_VERSION: &str = "1";

/// A record persisted as one YAML file.
pub trait ConfigRecord: Serialize + DeserializeOwned {
    /// Resource tag attached to errors for this record type.
    const RESOURCE: Resource;
}

/// Installation-wide settings stored at `<root>/config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Schema/format version tag. Recorded only, never migrated.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Administrative owner of this installation.
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
}

impl GlobalConfig {
    /// Create a config for `owner` at the current format version.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            owner: owner.into(),
        }
    }
}

impl ConfigRecord for GlobalConfig {
    const RESOURCE: Resource = Resource::GlobalConfig;
}

/// Metadata of a single vault, stored at `<root>/vaults/<name>/vault.yaml`.
///
/// `description` and `updated_at` use the empty string for "unset" and are
/// left out of the encoded file in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault name. Expected to match the directory name; not checked here.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    /// Principals with access, in insertion order. Duplicates are kept.
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub updated_at: String,
}

impl VaultConfig {
    /// Create a config for a freshly provisioned vault.
    ///
    /// # Postconditions
    /// - `created_at` is the current UTC time in RFC 3339
    /// - `description`, `members` and `updated_at` are empty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            members: Vec::new(),
            created_at: now_rfc3339(),
            updated_at: String::new(),
        }
    }

    /// Stamp `updated_at` with the current time.
    pub fn touch(&mut self) {
        self.updated_at = now_rfc3339();
    }

    /// Whether the record has been modified since creation.
    pub fn is_updated(&self) -> bool {
        !self.updated_at.is_empty()
    }
}

impl ConfigRecord for VaultConfig {
    const RESOURCE: Resource = Resource::VaultConfig;
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
