use std::collections::HashMap;

use itertools::Itertools;

use super::{EdgeType, LineIndex, RouteCosts, RouteEdge, RouteNode, RouteNodeId, StationIndex};
use crate::model::{LineId, StationId, TransitNetwork};

/// weighted graph over (line, station) nodes. adjacent stations on a line
/// are connected by ride edges in both directions, and every pair of nodes
/// at the same station is connected by transfer edges in both directions.
///
/// the build is deterministic: stations are interned in name order, nodes
/// are numbered in line declaration order and then station order, and
/// adjacency lists are filled in that same order.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    lines: Vec<LineId>,
    stations: Vec<StationId>,
    station_lookup: HashMap<StationId, StationIndex>,
    nodes: Vec<RouteNode>,
    adjacency: Vec<Vec<RouteEdge>>,
    station_nodes: Vec<Vec<RouteNodeId>>,
    costs: RouteCosts,
}

impl RouteGraph {
    pub fn new(network: &TransitNetwork, costs: RouteCosts) -> RouteGraph {
        let stations = network.stations().into_iter().cloned().collect_vec();
        let station_lookup: HashMap<StationId, StationIndex> = stations
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.clone(), StationIndex(idx)))
            .collect();

        let mut graph = RouteGraph {
            lines: Vec::with_capacity(network.lines.len()),
            station_nodes: vec![vec![]; stations.len()],
            stations,
            station_lookup,
            nodes: vec![],
            adjacency: vec![],
            costs,
        };

        let mut node_lookup: HashMap<RouteNode, RouteNodeId> = HashMap::new();
        for line in network.lines.iter() {
            let line_index = LineIndex(graph.lines.len());
            graph.lines.push(line.name.clone());
            if line.stations.is_empty() {
                log::warn!("line '{}' has no stations, skipping", line.name);
                continue;
            }

            let mut previous: Option<RouteNodeId> = None;
            for station in line.stations.iter() {
                let Some(station_index) = graph.station_lookup.get(station).copied() else {
                    continue;
                };
                let node = RouteNode {
                    line: line_index,
                    station: station_index,
                };
                let node_id = match node_lookup.get(&node) {
                    Some(id) => *id,
                    None => {
                        let id = graph.add_node(node);
                        node_lookup.insert(node, id);
                        id
                    }
                };
                if let Some(prev) = previous {
                    if prev != node_id {
                        graph.add_bidirectional_edge(prev, node_id, EdgeType::Ride);
                    }
                }
                previous = Some(node_id);
            }
        }

        // every node at a station belongs to a different line
        let transfer_pairs = graph
            .station_nodes
            .iter()
            .flat_map(|nodes| nodes.iter().copied().tuple_combinations::<(_, _)>())
            .collect_vec();
        for (a, b) in transfer_pairs {
            graph.add_bidirectional_edge(a, b, EdgeType::Transfer);
        }

        log::debug!(
            "built route graph with {} lines, {} stations, {} nodes, {} edges",
            graph.lines.len(),
            graph.stations.len(),
            graph.nodes.len(),
            graph.n_edges()
        );
        graph
    }

    fn add_node(&mut self, node: RouteNode) -> RouteNodeId {
        let id = RouteNodeId(self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(vec![]);
        if let Some(at_station) = self.station_nodes.get_mut(node.station.0) {
            at_station.push(id);
        }
        id
    }

    fn add_bidirectional_edge(&mut self, a: RouteNodeId, b: RouteNodeId, edge_type: EdgeType) {
        self.add_edge(a, b, edge_type);
        self.add_edge(b, a, edge_type);
    }

    fn add_edge(&mut self, src: RouteNodeId, dst: RouteNodeId, edge_type: EdgeType) {
        let minutes = self.costs.minutes(edge_type);
        if let Some(out_edges) = self.adjacency.get_mut(src.0) {
            if !out_edges.iter().any(|e| e.dst == dst) {
                out_edges.push(RouteEdge {
                    dst,
                    edge_type,
                    minutes,
                });
            }
        }
    }

    /// finds the index of a station by name, ignoring surrounding whitespace.
    pub fn station_index(&self, name: &str) -> Option<StationIndex> {
        self.station_lookup.get(name.trim()).copied()
    }

    pub fn station(&self, index: &StationIndex) -> Option<&StationId> {
        self.stations.get(index.0)
    }

    pub fn line(&self, index: &LineIndex) -> Option<&LineId> {
        self.lines.get(index.0)
    }

    pub fn node(&self, id: &RouteNodeId) -> Option<&RouteNode> {
        self.nodes.get(id.0)
    }

    /// all stations, sorted by name.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    pub fn out_edges(&self, id: &RouteNodeId) -> &[RouteEdge] {
        self.adjacency.get(id.0).map(|e| e.as_slice()).unwrap_or_default()
    }

    /// nodes hosting this station, one per serving line.
    pub fn station_nodes(&self, index: &StationIndex) -> &[RouteNodeId] {
        self.station_nodes
            .get(index.0)
            .map(|n| n.as_slice())
            .unwrap_or_default()
    }

    pub fn station_indices(&self) -> impl Iterator<Item = StationIndex> {
        (0..self.stations.len()).map(StationIndex)
    }

    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.adjacency.iter().map(|e| e.len()).sum()
    }

    pub fn costs(&self) -> &RouteCosts {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransitLine;

    fn build(lines: Vec<TransitLine>) -> RouteGraph {
        let network =
            TransitNetwork::new(lines).expect("test invariant failed: network should be valid");
        RouteGraph::new(&network, RouteCosts::new(2, 6))
    }

    fn edge_types(graph: &RouteGraph, id: RouteNodeId) -> Vec<(usize, EdgeType, u32)> {
        graph
            .out_edges(&id)
            .iter()
            .map(|e| (e.dst.0, e.edge_type, e.minutes))
            .collect_vec()
    }

    #[test]
    fn test_ride_and_transfer_edges() {
        // nodes: 0 = (L1, X), 1 = (L1, Y), 2 = (L1, Z), 3 = (L2, Z), 4 = (L2, W)
        let graph = build(vec![
            TransitLine::new("L1", ["X", "Y", "Z"]),
            TransitLine::new("L2", ["Z", "W"]),
        ]);
        assert_eq!(graph.n_stations(), 4);
        assert_eq!(graph.n_nodes(), 5);
        // 3 ride links and 1 transfer link, each in both directions
        assert_eq!(graph.n_edges(), 8);

        assert_eq!(edge_types(&graph, RouteNodeId(0)), vec![(1, EdgeType::Ride, 2)]);
        assert_eq!(
            edge_types(&graph, RouteNodeId(2)),
            vec![(1, EdgeType::Ride, 2), (3, EdgeType::Transfer, 6)]
        );
        assert_eq!(
            edge_types(&graph, RouteNodeId(3)),
            vec![(4, EdgeType::Ride, 2), (2, EdgeType::Transfer, 6)]
        );

        let z = graph.station_index("Z").expect("Z should exist");
        assert_eq!(graph.station_nodes(&z), &[RouteNodeId(2), RouteNodeId(3)]);
    }

    #[test]
    fn test_single_line_station_has_no_transfers() {
        let graph = build(vec![
            TransitLine::new("L1", ["X", "Y"]),
            TransitLine::new("L2", ["Y", "W"]),
        ]);
        let x = graph.station_index("X").expect("X should exist");
        let nodes = graph.station_nodes(&x);
        assert_eq!(nodes.len(), 1);
        assert!(graph
            .out_edges(&nodes[0])
            .iter()
            .all(|e| e.edge_type == EdgeType::Ride));
    }

    #[test]
    fn test_single_station_line() {
        let graph = build(vec![
            TransitLine::new("L1", ["X", "Y"]),
            TransitLine::new("Shuttle", ["Q"]),
        ]);
        let q = graph.station_index("Q").expect("Q should exist");
        let nodes = graph.station_nodes(&q);
        assert_eq!(nodes.len(), 1);
        assert!(graph.out_edges(&nodes[0]).is_empty());
    }

    #[test]
    fn test_loop_line_collapses_repeated_station() {
        let graph = build(vec![TransitLine::new("Loop", ["A", "B", "C", "A"])]);
        assert_eq!(graph.n_nodes(), 3);
        // A-B, B-C, C-A in both directions
        assert_eq!(graph.n_edges(), 6);
    }

    #[test]
    fn test_consecutive_repeat_has_no_self_loop() {
        let graph = build(vec![TransitLine::new("L1", ["A", "A", "B"])]);
        assert_eq!(graph.n_nodes(), 2);
        assert_eq!(graph.n_edges(), 2);
    }

    #[test]
    fn test_three_lines_at_one_station() {
        let graph = build(vec![
            TransitLine::new("L1", ["A", "Hub"]),
            TransitLine::new("L2", ["Hub", "B"]),
            TransitLine::new("L3", ["C", "Hub"]),
        ]);
        let hub = graph.station_index("Hub").expect("Hub should exist");
        let transfers = graph
            .station_nodes(&hub)
            .iter()
            .flat_map(|n| graph.out_edges(n))
            .filter(|e| e.edge_type == EdgeType::Transfer)
            .count();
        assert_eq!(transfers, 6);
    }

    #[test]
    fn test_build_is_deterministic() {
        let network = TransitNetwork::bundled().expect("bundled network should load");
        let a = RouteGraph::new(&network, RouteCosts::default());
        let b = RouteGraph::new(&network, RouteCosts::default());
        assert_eq!(a.stations(), b.stations());
        for id in (0..a.n_nodes()).map(RouteNodeId) {
            assert_eq!(a.node(&id), b.node(&id));
            assert_eq!(a.out_edges(&id), b.out_edges(&id));
        }
    }

    #[test]
    fn test_station_lookup_trims() {
        let graph = build(vec![TransitLine::new("L1", ["Old Town", "Harbor"])]);
        assert!(graph.station_index("  Old Town ").is_some());
        assert!(graph.station_index("Nowhere").is_none());
    }
}
