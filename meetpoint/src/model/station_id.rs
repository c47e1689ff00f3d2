use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt::Display};

/// name of a transit station. any two lines that list the same StationId
/// share a transfer point at that station. surrounding whitespace is
/// removed on construction so that user input and network files agree.
#[derive(
    Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for StationId {
    fn from(value: String) -> Self {
        StationId(value.trim().to_string())
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        StationId(value.trim().to_string())
    }
}

impl From<StationId> for String {
    fn from(value: StationId) -> Self {
        value.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
