use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{LineId, StationId, TransitLine, TransitNetwork};

/// listing of a transit network for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkSummary {
    pub lines: Vec<TransitLine>,
    pub stations: Vec<StationId>,
    pub transfer_stations: Vec<StationId>,
    pub loop_lines: Vec<LineId>,
}

impl From<&TransitNetwork> for NetworkSummary {
    fn from(network: &TransitNetwork) -> Self {
        NetworkSummary {
            lines: network.lines.clone(),
            stations: network.stations().into_iter().cloned().collect_vec(),
            transfer_stations: network
                .transfer_stations()
                .into_iter()
                .cloned()
                .collect_vec(),
            loop_lines: network.loop_lines().into_iter().cloned().collect_vec(),
        }
    }
}
