//! Common types used throughout secretkeep.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a vault, checked to be safe as a single path component.
///
/// The path helpers accept any string; callers that take names from users
/// should construct a `VaultName` first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VaultName(String);

impl VaultName {
    /// Create a new VaultName from a string.
    ///
    /// # Preconditions
    /// - `name` must be non-empty
    /// - `name` must not be `.` or `..`
    /// - `name` must not contain `/`, `\` or NUL
    ///
    /// # Errors
    /// - Returns `Error::InvalidInput` if any precondition is violated
    pub fn new(name: impl Into<String>) -> crate::Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(crate::Error::InvalidInput(
                "Vault name cannot be empty".to_string(),
            ));
        }
        if name == "." || name == ".." {
            return Err(crate::Error::InvalidInput(format!(
                "Vault name cannot be '{}'",
                name
            )));
        }
        if name.contains(['/', '\\', '\0']) {
            return Err(crate::Error::InvalidInput(format!(
                "Vault name cannot contain separators: {:?}",
                name
            )));
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for VaultName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VaultName {
    type Error = crate::Error;

    fn try_from(value: String) -> crate::Result<Self> {
        Self::new(value)
    }
}

impl From<VaultName> for String {
    fn from(name: VaultName) -> Self {
        name.0
    }
}

impl fmt::Display for VaultName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
