use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// travel between adjacent stations on the same line
    Ride,
    /// change between two lines at a shared station
    Transfer,
}

impl Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeType::Ride => write!(f, "ride"),
            EdgeType::Transfer => write!(f, "transfer"),
        }
    }
}
