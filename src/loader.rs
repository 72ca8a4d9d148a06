use crate::errors::{LoadDiagnostic, LoadError};
use crate::graph::{Graph, Node, NodeId};

use std::{fs, path::Path, sync::LazyLock};
use regex::Regex;
use tracing::{debug, warn};


/// `Name(x,y), neighbor1, neighbor2, ...` - the neighbor list may be empty
static NODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]+)\s*\(\s*(-?\d+)\s*,\s*(-?\d+)\s*\)\s*(?:,(.*))?$")
        .expect("node line pattern is valid") // constant pattern, should not fail
});


/// Loaded graph plus everything that was skipped on the way
#[derive(Debug)]
pub struct LoadReport {
    pub graph: Graph,
    pub diagnostics: Vec<LoadDiagnostic>,
}

/// Node line waiting for its edges
struct PendingEdges<'a> {
    line: usize,
    from: NodeId,
    neighbors: &'a str,
}


/// Read a map file, only I/O problems are fatal
pub fn load_graph(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading map");
    Ok(parse_graph(&text))
}

/// Build a graph from map text
/// Nodes are created first, edges second, so a neighbor may be defined
/// further down the file. Anything unusable is skipped with a diagnostic
pub fn parse_graph(text: &str) -> LoadReport {

    let mut graph = Graph::new();
    let mut diagnostics = Vec::new();
    let mut pending = Vec::new();

    for (line_index, raw) in text.lines().enumerate() {
        let line = line_index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(captures) = NODE_LINE.captures(trimmed) else {
            report(&mut diagnostics, LoadDiagnostic::MalformedLine {
                line,
                content: trimmed.to_string(),
            });
            continue;
        };

        let name = &captures[1];
        let (Ok(x), Ok(y)) = (captures[2].parse::<i32>(), captures[3].parse::<i32>()) else {
            report(&mut diagnostics, LoadDiagnostic::InvalidCoordinate {
                line,
                name: name.to_string(),
            });
            continue;
        };

        if graph.node_id(name).is_some() {
            report(&mut diagnostics, LoadDiagnostic::DuplicateNode {
                line,
                name: name.to_string(),
            });
        }

        let from = graph.add_node(Node::new(name, x, y));
        pending.push(PendingEdges {
            line,
            from,
            neighbors: captures.get(4).map_or("", |m| m.as_str()),
        });
    }

    for PendingEdges { line, from, neighbors } in pending {
        for neighbor in neighbors.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let Some(to) = graph.node_id(neighbor) else {
                let node = graph.node(from).map_or("", |n| n.name()).to_string();
                report(&mut diagnostics, LoadDiagnostic::UnknownNeighbor {
                    line,
                    node,
                    neighbor: neighbor.to_string(),
                });
                continue;
            };
            // both ids come from this graph
            if let Err(error) = graph.add_edge(from, to) {
                warn!(%error, line, "edge skipped");
            }
        }
    }

    debug!(nodes = graph.len(), skipped = diagnostics.len(), "map parsed");

    LoadReport { graph, diagnostics }
}

fn report(diagnostics: &mut Vec<LoadDiagnostic>, diagnostic: LoadDiagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::{compute_shortest_path, PathOutcome};
    use std::io::Write;

    const MAP: &str = "\
# small road map
Hamburg(10,0), Berlin, Hannover

Berlin(40, 10), Hamburg
Hannover(8,-20), Hamburg, Berlin
";

    fn neighbor_names<'a>(graph: &'a Graph, name: &str) -> Vec<&'a str> {
        graph
            .get_node_by_name(name)
            .unwrap()
            .neighbors()
            .iter()
            .map(|&id| graph.node(id).unwrap().name())
            .collect()
    }

    #[test]
    fn test_parse_nodes_and_edges() {
        let LoadReport { graph, diagnostics } = parse_graph(MAP);

        assert!(diagnostics.is_empty());
        let names: Vec<_> = graph.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["Hamburg", "Berlin", "Hannover"]);

        let hannover = graph.get_node_by_name("Hannover").unwrap();
        assert_eq!((hannover.x(), hannover.y()), (8, -20));

        // forward references resolve, edges are directed
        assert_eq!(neighbor_names(&graph, "Hamburg"), vec!["Berlin", "Hannover"]);
        assert_eq!(neighbor_names(&graph, "Berlin"), vec!["Hamburg"]);
        assert_eq!(neighbor_names(&graph, "Hannover"), vec!["Hamburg", "Berlin"]);
    }

    #[test]
    fn test_node_without_neighbors() {
        let LoadReport { graph, diagnostics } = parse_graph("A(0,0)\nB(1,1),\nC(2,2), ,A");

        assert!(diagnostics.is_empty());
        assert_eq!(graph.len(), 3);
        assert!(neighbor_names(&graph, "A").is_empty());
        assert!(neighbor_names(&graph, "B").is_empty());
        assert_eq!(neighbor_names(&graph, "C"), vec!["A"]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "A(0,0), B\nthis is not a node\nB(1,x), A\nC[2,2], A\nB(3,4), A";
        let LoadReport { graph, diagnostics } = parse_graph(text);

        let names: Vec<_> = graph.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(diagnostics, vec![
            LoadDiagnostic::MalformedLine { line: 2, content: "this is not a node".to_string() },
            LoadDiagnostic::MalformedLine { line: 3, content: "B(1,x), A".to_string() },
            LoadDiagnostic::MalformedLine { line: 4, content: "C[2,2], A".to_string() },
        ]);
        assert_eq!(neighbor_names(&graph, "A"), vec!["B"]);
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let LoadReport { graph, diagnostics } = parse_graph("A(99999999999,0)\nB(-2147483648,2147483647)");

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.min_x(), i32::MIN);
        assert_eq!(diagnostics, vec![
            LoadDiagnostic::InvalidCoordinate { line: 1, name: "A".to_string() },
        ]);
    }

    #[test]
    fn test_unknown_neighbor_is_skipped() {
        let LoadReport { graph, diagnostics } = parse_graph("A(0,0), B, Ghost\nB(1,0)");

        assert_eq!(neighbor_names(&graph, "A"), vec!["B"]);
        assert_eq!(diagnostics, vec![
            LoadDiagnostic::UnknownNeighbor {
                line: 1,
                node: "A".to_string(),
                neighbor: "Ghost".to_string(),
            },
        ]);
    }

    #[test]
    fn test_duplicate_node_is_reported() {
        let LoadReport { graph, diagnostics } = parse_graph("A(0,0)\nA(5,5)");

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.get_node_by_name("A").unwrap().x(), 5);
        assert_eq!(diagnostics, vec![
            LoadDiagnostic::DuplicateNode { line: 2, name: "A".to_string() },
        ]);
    }

    #[test]
    fn test_empty_input() {
        let LoadReport { graph, diagnostics } = parse_graph("\n   \n# only a comment\n");
        assert!(graph.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_load_graph_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"A(0,0), B, C\nB(3,0), C\nC(3,4)\n").unwrap();

        let LoadReport { mut graph, diagnostics } = load_graph(file.path()).unwrap();
        assert!(diagnostics.is_empty());

        let result = compute_shortest_path(&mut graph, "A", "C");
        assert_eq!(result.optimal_path, vec!["A", "C"]);
        assert_eq!(result.outcome, PathOutcome::Found { distance: 5.0 });
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_graph(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
