use serde::{Deserialize, Serialize};

use super::search;
use crate::{
    graph::{EdgeType, RouteGraph},
    model::{LineId, StationId},
};

/// one stop along a route, as served by a particular line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    pub line: LineId,
    pub station: StationId,
}

/// travel minutes and number of line changes on a shortest route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub minutes: u32,
    pub transfers: usize,
    pub steps: Vec<RouteStep>,
}

/// finds the shortest route between two stations and counts the transfer
/// edges along it by walking the predecessor chain back from the first
/// settled node of the destination station.
///
/// # Returns
///
/// None if either station is unknown or the stations are not connected.
/// a route from a station to itself takes zero minutes and zero transfers.
pub fn route_summary(graph: &RouteGraph, src: &str, dst: &str) -> Option<RouteSummary> {
    let src_index = graph.station_index(src)?;
    let dst_index = graph.station_index(dst)?;
    if src_index == dst_index {
        return Some(RouteSummary {
            minutes: 0,
            transfers: 0,
            steps: vec![],
        });
    }

    let tree = search::run_search(graph, graph.station_nodes(&src_index), Some(dst_index));
    let destination = tree.destination()?;
    let minutes = tree.minutes(&destination)?;
    let path = tree.path_to(&destination);

    let transfers = path
        .iter()
        .filter(|(_, et)| *et == Some(EdgeType::Transfer))
        .count();
    let steps = path
        .iter()
        .filter_map(|(node_id, _)| {
            let node = graph.node(node_id)?;
            Some(RouteStep {
                line: graph.line(&node.line)?.clone(),
                station: graph.station(&node.station)?.clone(),
            })
        })
        .collect();

    Some(RouteSummary {
        minutes,
        transfers,
        steps,
    })
}
