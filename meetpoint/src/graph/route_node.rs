use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// dense index of a (line, station) node, assigned in line declaration
/// order and then station order.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct RouteNodeId(pub usize);

/// dense index of a station. indices follow the lexicographic order of
/// station names.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct StationIndex(pub usize);

/// dense index of a line in declaration order.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct LineIndex(pub usize);

/// a station as served by one particular line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct RouteNode {
    pub line: LineIndex,
    pub station: StationIndex,
}

impl Display for RouteNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for StationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
