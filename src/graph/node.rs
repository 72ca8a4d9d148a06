use super::NodeId;


/// Vertex of the road map
/// Static data (name, position, outgoing edges) plus the state a search
/// leaves behind on it. The search state is mutated in place and cleared by
/// `Graph::reset`
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    name: String,
    x: i32,
    y: i32,
    neighbors: Vec<NodeId>, // directed, insertion ordered, no duplicates
    distance: f64, // best known cost from the start, infinity when unknown
    previous: Option<NodeId>, // predecessor on the best known path
    processed: bool, // settled - distance is final
    on_shortest_path: bool, // display flag for renderers
}

impl Node {

    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            neighbors: Vec::new(),
            distance: f64::INFINITY,
            previous: None,
            processed: false,
            on_shortest_path: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Add a directed edge to `neighbor`
    /// Returns false if the edge already existed
    pub fn add_neighbor(&mut self, neighbor: NodeId) -> bool {
        if self.neighbors.contains(&neighbor) {
            return false;
        }
        self.neighbors.push(neighbor);
        true
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    pub fn set_previous(&mut self, previous: Option<NodeId>) {
        self.previous = previous;
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn set_processed(&mut self, processed: bool) {
        self.processed = processed;
    }

    pub fn is_on_shortest_path(&self) -> bool {
        self.on_shortest_path
    }

    pub fn set_on_shortest_path(&mut self, on_shortest_path: bool) {
        self.on_shortest_path = on_shortest_path;
    }

    /// Clear everything a previous search wrote on this node
    pub fn reset_search_state(&mut self) {
        self.distance = f64::INFINITY;
        self.previous = None;
        self.processed = false;
        self.on_shortest_path = false;
    }
}
