use thiserror::Error;

use crate::graph::NodeId;


#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("no node with id {0}")]
    UnknownNodeId(NodeId),
    #[error("no node named {0:?}")]
    UnknownNodeName(String),
}

/// Search outcomes that are not a usable route
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("start node {0:?} not found")]
    StartNotFound(String), // stale or mistyped selection
    #[error("no path from {start:?} to {end:?}")]
    NoPath { start: String, end: String },
    #[error("parent chain broken at node {0}")]
    BrokenParentChain(NodeId),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal problem found while loading a map, the offending line is skipped
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadDiagnostic {
    #[error("line {line}: invalid format: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: coordinate out of range for node {name:?}")]
    InvalidCoordinate { line: usize, name: String },
    #[error("line {line}: node {name:?} already defined, later definition wins")]
    DuplicateNode { line: usize, name: String },
    #[error("line {line}: node {node:?} references unknown neighbor {neighbor:?}")]
    UnknownNeighbor { line: usize, node: String, neighbor: String },
}
