use serde::{Deserialize, Serialize};

use super::NetworkSource;
use crate::{app::MidpointAppError, graph::RouteCosts, service::MidpointService};

/// defines the transit network and edge weights used for midpoint search
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MidpointConfiguration {
    pub minutes_per_stop: u32,
    pub transfer_penalty: u32,
    pub network: NetworkSource,
    pub suggestion_limit: usize,
}

impl Default for MidpointConfiguration {
    fn default() -> Self {
        let costs = RouteCosts::default();
        Self {
            minutes_per_stop: costs.minutes_per_stop,
            transfer_penalty: costs.transfer_penalty,
            network: NetworkSource::default(),
            suggestion_limit: MidpointService::DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl MidpointConfiguration {
    pub fn route_costs(&self) -> RouteCosts {
        RouteCosts::new(self.minutes_per_stop, self.transfer_penalty)
    }
}

impl TryFrom<&String> for MidpointConfiguration {
    type Error = MidpointAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                MidpointAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                MidpointAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                MidpointAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                MidpointAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(MidpointAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
