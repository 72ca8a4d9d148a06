pub mod dijkstra;
mod shortest_path;

use shortest_path::shortest_path;

pub use dijkstra::{compute_shortest_path, PathOutcome, Route, SearchResult, ShortestPathFinder};
