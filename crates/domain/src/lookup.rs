//! Lookup request and outcome types.
//!
//! Every request ends in exactly one of four outcomes: the name is missing,
//! the name matches no product, the product has no version, or the version
//! is returned. [`LookupResult`] encodes that closed set.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Machine-readable failure codes published to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No item name was supplied
    NameMissing,
    /// The item name matches no catalog product
    InvalidItemName,
    /// The product exists but carries no version
    NoVersion,
}

impl ErrorCode {
    /// All published codes
    pub const ALL: [ErrorCode; 3] = [Self::NameMissing, Self::InvalidItemName, Self::NoVersion];

    /// Wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameMissing => "NAME_MISSING",
            Self::InvalidItemName => "INVALID_ITEM_NAME",
            Self::NoVersion => "NO_VERSION",
        }
    }

    /// Fixed human-readable message for the code
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameMissing => "The required item name was not provided.",
            Self::InvalidItemName => "The item name provided does not exist.",
            Self::NoVersion => "No version information was found.",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| DomainError::UnknownErrorCode(s.to_string()))
    }
}

/// Incoming lookup parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Product display name, already URL-decoded; may be absent or blank
    #[serde(default)]
    pub item_name: Option<String>,
}

impl LookupRequest {
    /// Request for the given name
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: Some(item_name.into()),
        }
    }

    /// Request without a name
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Outcome of a single version lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// A version was found
    Success {
        /// Published version string
        version: String,
        /// Human-readable confirmation
        message: String,
    },
    /// One of the expected failure states
    Failure {
        /// Failure code
        code: ErrorCode,
        /// Human-readable explanation
        message: String,
    },
}

impl LookupResult {
    /// Successful outcome
    pub fn success(version: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Success {
            version: version.into(),
            message: message.into(),
        }
    }

    /// Failure outcome carrying the code's fixed message
    pub fn failure(code: ErrorCode) -> Self {
        Self::Failure {
            code,
            message: code.message().to_string(),
        }
    }

    /// Whether a version was found
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure code, `None` on success
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { code, .. } => Some(*code),
        }
    }

    /// Version string, only present on success
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Success { version, .. } => Some(version),
            Self::Failure { .. } => None,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    /// Short label for logs
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Success { .. } => "SUCCESS",
            Self::Failure { code, .. } => code.as_str(),
        }
    }
}
