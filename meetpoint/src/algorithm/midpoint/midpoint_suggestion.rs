use serde::{Deserialize, Serialize};

use crate::model::StationId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerMinutes {
    pub traveler: String,
    pub minutes: u32,
}

/// a suggested meeting station along with its fairness score and the
/// minutes each traveler needs to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidpointSuggestion {
    pub station: StationId,
    pub fairness: u32,
    pub total_minutes: u64,
    pub travelers: Vec<TravelerMinutes>,
}
