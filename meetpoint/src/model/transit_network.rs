use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::Path,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{LineId, NetworkError, StationId, TransitLine};

const BUNDLED_NETWORK: &str = include_str!("../resources/default_network.toml");

/// the static line/station table that a route graph is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitNetwork {
    pub lines: Vec<TransitLine>,
}

impl TransitNetwork {
    /// creates a validated network from a set of lines.
    pub fn new(lines: Vec<TransitLine>) -> Result<TransitNetwork, NetworkError> {
        let network = TransitNetwork { lines };
        network.validate()?;
        Ok(network)
    }

    /// the network shipped with this crate, six lines over about fifty stations.
    pub fn bundled() -> Result<TransitNetwork, NetworkError> {
        let network: TransitNetwork = toml::from_str(BUNDLED_NETWORK).map_err(|e| {
            NetworkError::DecodeError(String::from("bundled network"), e.to_string())
        })?;
        network.validate()?;
        Ok(network)
    }

    /// confirms that line names are present and unique and that no station
    /// name is empty. lines without stations are permitted but contribute
    /// nothing to a route graph.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.lines.is_empty() {
            return Err(NetworkError::NoLinesFound);
        }
        let mut names: HashSet<&LineId> = HashSet::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if line.name.is_empty() {
                return Err(NetworkError::EmptyLineName(idx));
            }
            if !names.insert(&line.name) {
                return Err(NetworkError::DuplicateLine(line.name.clone()));
            }
            if let Some(pos) = line.stations.iter().position(|s| s.is_empty()) {
                return Err(NetworkError::EmptyStationName(line.name.clone(), pos));
            }
            if line.stations.is_empty() {
                log::warn!("line '{}' has no stations", line.name);
            }
        }
        Ok(())
    }

    /// all stations in the network, deduplicated and sorted by name.
    pub fn stations(&self) -> Vec<&StationId> {
        self.lines
            .iter()
            .flat_map(|l| l.stations.iter())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect_vec()
    }

    /// lines serving each station, in line declaration order.
    pub fn station_lines(&self) -> BTreeMap<&StationId, Vec<&LineId>> {
        let mut result: BTreeMap<&StationId, Vec<&LineId>> = BTreeMap::new();
        for line in self.lines.iter() {
            for station in line.stations.iter().unique() {
                result.entry(station).or_default().push(&line.name);
            }
        }
        result
    }

    /// stations served by more than one line, sorted by name.
    pub fn transfer_stations(&self) -> Vec<&StationId> {
        self.station_lines()
            .into_iter()
            .filter(|(_, lines)| lines.len() > 1)
            .map(|(station, _)| station)
            .collect_vec()
    }

    /// names of lines that return to their first station.
    pub fn loop_lines(&self) -> Vec<&LineId> {
        self.lines
            .iter()
            .filter(|l| l.is_loop())
            .map(|l| &l.name)
            .collect_vec()
    }
}

impl TryFrom<&Path> for TransitNetwork {
    type Error = NetworkError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let f = path.to_str().unwrap_or_default().to_string();
        let read = || {
            std::fs::read_to_string(path).map_err(|e| NetworkError::ReadError(f.clone(), e))
        };
        let network: TransitNetwork = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&read()?)
                .map_err(|e| NetworkError::DecodeError(f.clone(), e.to_string()))?,
            Some("json") => serde_json::from_str(&read()?)
                .map_err(|e| NetworkError::DecodeError(f.clone(), e.to_string()))?,
            _ => return Err(NetworkError::UnsupportedFileType(f.clone())),
        };
        network.validate()?;
        log::debug!(
            "read transit network from {f} with {} lines",
            network.lines.len()
        );
        Ok(network)
    }
}
