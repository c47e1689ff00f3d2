use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// name of a transit line.
#[derive(
    Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for LineId {
    fn from(value: String) -> Self {
        LineId(value.trim().to_string())
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        LineId(value.trim().to_string())
    }
}

impl From<LineId> for String {
    fn from(value: LineId) -> Self {
        value.0
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
