//! Shortest route planning over small road maps.
//!
//! Nodes sit on integer coordinates, edges are directed and weigh the
//! straight line distance between their endpoints. A search records the
//! order nodes were visited in so a front end can animate it.

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod loader;

pub use errors::{GraphError, LoadDiagnostic, LoadError, PathError};
pub use graph::{Graph, Node, NodeId};
pub use graph_algos::{compute_shortest_path, PathOutcome, Route, SearchResult, ShortestPathFinder};
pub use loader::{load_graph, parse_graph, LoadReport};
