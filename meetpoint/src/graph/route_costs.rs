use serde::{Deserialize, Serialize};

use super::EdgeType;

/// fixed edge weights of a route graph, in minutes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RouteCosts {
    pub minutes_per_stop: u32,
    pub transfer_penalty: u32,
}

impl Default for RouteCosts {
    fn default() -> Self {
        Self {
            minutes_per_stop: 2,
            transfer_penalty: 6,
        }
    }
}

impl RouteCosts {
    pub fn new(minutes_per_stop: u32, transfer_penalty: u32) -> RouteCosts {
        RouteCosts {
            minutes_per_stop,
            transfer_penalty,
        }
    }

    pub fn minutes(&self, edge_type: EdgeType) -> u32 {
        match edge_type {
            EdgeType::Ride => self.minutes_per_stop,
            EdgeType::Transfer => self.transfer_penalty,
        }
    }
}
