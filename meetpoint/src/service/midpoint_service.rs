use std::sync::Arc;

use itertools::Itertools;

use super::TravelTimeCache;
use crate::{
    algorithm::{
        self,
        midpoint::{midpoint_ops, MidpointSuggestion, Traveler},
        RouteSummary, StationTimes,
    },
    app::MidpointAppError,
    config::MidpointConfiguration,
    graph::{RouteCosts, RouteGraph, StationIndex},
    model::TransitNetwork,
};

/// owns a transit network, the route graph built from it, and a travel time
/// cache. build it once and share it by reference; all queries take `&self`
/// and the service is safe to use from several threads.
#[derive(Debug)]
pub struct MidpointService {
    network: TransitNetwork,
    graph: RouteGraph,
    cache: TravelTimeCache,
    suggestion_limit: usize,
}

impl MidpointService {
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

    pub fn new(network: TransitNetwork, costs: RouteCosts) -> MidpointService {
        let graph = RouteGraph::new(&network, costs);
        MidpointService {
            network,
            graph,
            cache: TravelTimeCache::default(),
            suggestion_limit: Self::DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_suggestion_limit(mut self, suggestion_limit: usize) -> MidpointService {
        self.suggestion_limit = suggestion_limit;
        self
    }

    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn cache(&self) -> &TravelTimeCache {
        &self.cache
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    /// minimum travel minutes between two stations. None if either station is
    /// unknown or they are not connected. results are shared between both
    /// directions of a pair since every edge has a reverse of equal weight.
    pub fn travel_time(&self, src: &str, dst: &str) -> Option<u32> {
        let src_index = self.graph.station_index(src)?;
        let dst_index = self.graph.station_index(dst)?;
        if src_index == dst_index {
            return Some(0);
        }
        if let Some(times) = self.cache.get(&src_index) {
            return times.get(&dst_index);
        }
        if let Some(times) = self.cache.get(&dst_index) {
            return times.get(&src_index);
        }
        let (origin, other) = if src_index < dst_index {
            (src_index, dst_index)
        } else {
            (dst_index, src_index)
        };
        self.times_from(origin).get(&other)
    }

    /// travel minutes and transfer count of the shortest route.
    pub fn route_summary(&self, src: &str, dst: &str) -> Option<RouteSummary> {
        algorithm::route_summary(&self.graph, src, dst)
    }

    /// the fairest meeting station for travelers each starting from one of
    /// the given stations. None when fewer than two stations are known.
    pub fn fair_midpoint(&self, stations: &[&str]) -> Option<MidpointSuggestion> {
        let travelers = stations.iter().map(|s| Traveler::at(s)).collect_vec();
        self.fair_midpoint_for_travelers(&travelers)
    }

    pub fn fair_midpoint_for_travelers(&self, travelers: &[Traveler]) -> Option<MidpointSuggestion> {
        self.rank_midpoints(travelers, 1).into_iter().next()
    }

    /// up to the configured suggestion limit of ranked meeting stations.
    pub fn suggest(&self, stations: &[&str]) -> Vec<MidpointSuggestion> {
        let travelers = stations.iter().map(|s| Traveler::at(s)).collect_vec();
        self.rank_midpoints(&travelers, self.suggestion_limit)
    }

    pub fn rank_midpoints(&self, travelers: &[Traveler], limit: usize) -> Vec<MidpointSuggestion> {
        midpoint_ops::rank_midpoints_with(&self.graph, travelers, limit, |origins| {
            match origins {
                [origin] => self.times_from(*origin),
                many => Arc::new(algorithm::travel_times_from(&self.graph, many)),
            }
        })
    }

    fn times_from(&self, origin: StationIndex) -> Arc<StationTimes> {
        self.cache.get_or_insert_with(origin, || {
            algorithm::travel_times_from(&self.graph, &[origin])
        })
    }
}

impl TryFrom<&MidpointConfiguration> for MidpointService {
    type Error = MidpointAppError;

    fn try_from(conf: &MidpointConfiguration) -> Result<Self, Self::Error> {
        if conf.suggestion_limit == 0 {
            return Err(MidpointAppError::ConfigurationError(String::from(
                "suggestion_limit must be at least 1",
            )));
        }
        let network = conf.network.load()?;
        let service = MidpointService::new(network, conf.route_costs())
            .with_suggestion_limit(conf.suggestion_limit);
        Ok(service)
    }
}
