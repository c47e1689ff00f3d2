mod edge_type;
mod route_costs;
mod route_edge;
mod route_graph;
mod route_node;

pub use edge_type::EdgeType;
pub use route_costs::RouteCosts;
pub use route_edge::RouteEdge;
pub use route_graph::RouteGraph;
pub use route_node::{LineIndex, RouteNode, RouteNodeId, StationIndex};
