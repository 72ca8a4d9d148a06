mod node;

pub use node::Node;

use crate::collections::FxHashMap;
use crate::errors::GraphError;
use crate::geometry::Bounds;


/// Index of a node in `Graph::nodes` - nodes are interned on insertion
/// so the search never hashes or compares names
pub type NodeId = usize;


/// Directed road map
/// Nodes keep their load order, names are indexed for O(1) lookup
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    name_index: FxHashMap<String, NodeId>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and index it by name
    /// A repeated name overwrites the index entry, the shadowed node stays
    /// in `nodes` but can no longer be found by name
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.name_index.insert(node.name().to_string(), id);
        self.nodes.push(node);
        id
    }

    /// Directed edge from -> to, a two way road needs two calls
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if to >= self.nodes.len() {
            return Err(GraphError::UnknownNodeId(to));
        }
        let node = self.nodes.get_mut(from).ok_or(GraphError::UnknownNodeId(from))?;
        node.add_neighbor(to);
        Ok(())
    }

    /// Directed edge between two named nodes
    pub fn add_edge_by_name(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from_id = self.node_id(from).ok_or_else(|| GraphError::UnknownNodeName(from.to_string()))?;
        let to_id = self.node_id(to).ok_or_else(|| GraphError::UnknownNodeName(to.to_string()))?;
        self.add_edge(from_id, to_id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear the search state of every node
    /// Must run before each search so nothing leaks from the previous one
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset_search_state();
        }
    }

    /// Bounding box of all nodes, None for an empty graph
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.nodes.split_first()?;
        let mut bounds = Bounds::point(first.x(), first.y());
        for node in rest {
            bounds.include(node.x(), node.y());
        }
        Some(bounds)
    }

    // The min/max accessors report 0 for an empty graph. That is a
    // convention, not a bound - use `bounds` to tell the cases apart

    pub fn min_x(&self) -> i32 {
        self.bounds().map_or(0, |b| b.min_x)
    }

    pub fn max_x(&self) -> i32 {
        self.bounds().map_or(0, |b| b.max_x)
    }

    pub fn min_y(&self) -> i32 {
        self.bounds().map_or(0, |b| b.min_y)
    }

    pub fn max_y(&self) -> i32 {
        self.bounds().map_or(0, |b| b.max_y)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // A(0,0) -> B(3,0) -> C(3,4), A -> C
    fn create_triangle() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new("A", 0, 0));
        let b = graph.add_node(Node::new("B", 3, 0));
        let c = graph.add_node(Node::new("C", 3, 4));
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(a, c).unwrap();
        graph
    }

    #[test]
    fn test_add_node_keeps_load_order() {
        let graph = create_triangle();
        let names: Vec<_> = graph.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.node_id("B"), Some(1));
    }

    #[test]
    fn test_get_node_by_name() {
        let graph = create_triangle();
        let c = graph.get_node_by_name("C").unwrap();
        assert_eq!((c.x(), c.y()), (3, 4));

        // names are case sensitive
        assert!(graph.get_node_by_name("c").is_none());
        assert!(graph.get_node_by_name("Z").is_none());
    }

    #[test]
    fn test_edges_are_directed() {
        let graph = create_triangle();
        assert_eq!(graph.get_node_by_name("A").unwrap().neighbors(), &[1, 2]);
        assert!(graph.get_node_by_name("C").unwrap().neighbors().is_empty());
    }

    #[test]
    fn test_add_edge_twice_is_noop() {
        let mut graph = create_triangle();
        graph.add_edge_by_name("A", "B").unwrap();
        assert_eq!(graph.get_node_by_name("A").unwrap().neighbors(), &[1, 2]);
    }

    #[test]
    fn test_add_edge_unknown_endpoints() {
        let mut graph = create_triangle();
        assert_eq!(graph.add_edge(0, 7), Err(GraphError::UnknownNodeId(7)));
        assert_eq!(graph.add_edge(9, 0), Err(GraphError::UnknownNodeId(9)));
        assert_eq!(
            graph.add_edge_by_name("A", "Z"),
            Err(GraphError::UnknownNodeName("Z".to_string()))
        );
        assert_eq!(graph.get_node_by_name("A").unwrap().neighbors(), &[1, 2]);
    }

    #[test]
    fn test_duplicate_name_overwrites_index() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("A", 0, 0));
        graph.add_node(Node::new("A", 9, 9));

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node_id("A"), Some(1));
        assert_eq!(graph.get_node_by_name("A").unwrap().x(), 9);
    }

    #[test]
    fn test_bounds() {
        let mut graph = create_triangle();
        graph.add_node(Node::new("D", -2, 7));

        assert_eq!(graph.min_x(), -2);
        assert_eq!(graph.max_x(), 3);
        assert_eq!(graph.min_y(), 0);
        assert_eq!(graph.max_y(), 7);
        assert_eq!(graph.bounds(), Some(Bounds { min_x: -2, max_x: 3, min_y: 0, max_y: 7 }));
    }

    #[test]
    fn test_empty_graph_bounds_are_zero() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.bounds(), None);
        assert_eq!((graph.min_x(), graph.max_x()), (0, 0));
        assert_eq!((graph.min_y(), graph.max_y()), (0, 0));
    }

    #[test]
    fn test_reset_clears_search_state() {
        let mut graph = create_triangle();
        for id in 0..graph.len() {
            let node = graph.node_mut(id).unwrap();
            node.set_distance(1.0);
            node.set_previous(Some(0));
            node.set_processed(true);
            node.set_on_shortest_path(true);
        }

        graph.reset();

        for node in graph.nodes() {
            assert_eq!(node.distance(), f64::INFINITY);
            assert_eq!(node.previous(), None);
            assert!(!node.is_processed());
            assert!(!node.is_on_shortest_path());
        }
        assert_eq!(graph.get_node_by_name("A").unwrap().neighbors(), &[1, 2]);
    }
}
