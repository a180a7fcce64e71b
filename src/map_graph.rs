use crate::graph::{MapEdge, MapNode, NodeList, SearchCosts};
use crate::GeographicPoint;

mod graph_config;
pub use self::graph_config::MapGraphConfig;

mod error;
pub use self::error::GraphError;

/// A road graph that owns its [`MapNode`]s.
///
/// Vertices are identified by their location. Edges are directed and stored on the Node they
/// leave from.
#[derive(Debug)]
pub struct MapGraph {
	nodes: NodeList,
	config: MapGraphConfig,
}

impl MapGraph {
	/// Creates an empty Graph with the default [`MapGraphConfig`]
	pub fn new() -> MapGraph {
		MapGraph::with_config(MapGraphConfig::default())
	}

	/// Creates an empty Graph
	pub fn with_config(config: MapGraphConfig) -> MapGraph {
		MapGraph {
			nodes: NodeList::new(),
			config,
		}
	}

	/// The config this Graph was created with
	pub fn config(&self) -> &MapGraphConfig {
		&self.config
	}

	/// Adds a vertex at `location`.
	///
	/// Returns `false` if there already is a vertex at that location, in which case the Graph
	/// is unchanged.
	pub fn add_vertex(&mut self, location: GeographicPoint) -> bool {
		let added = self.nodes.add_node(location).is_some();
		if added {
			log::trace!("added vertex ({})", location);
		} else {
			log::debug!("vertex ({}) already exists", location);
		}
		added
	}

	/// Adds a directed Edge from `from` to `to`.
	///
	/// Adding an Edge equal to an existing one is not an error, but doesn't change the Graph.
	///
	/// ## Errors
	/// - [`GraphError::UnknownLocation`] if either endpoint is not a vertex
	/// - [`GraphError::InvalidLength`] if `length` is negative or not finite
	/// - [`GraphError::SelfLoop`] if `from == to` and the config doesn't allow self-loops
	///
	/// ## Examples
	/// ```
	/// use road_graph::{GeographicPoint, GraphError, MapGraph};
	///
	/// let (a, b) = (GeographicPoint::new(0.0, 0.0), GeographicPoint::new(0.0, 1.0));
	/// let mut graph = MapGraph::new();
	/// graph.add_vertex(a);
	///
	/// assert_eq!(
	///     graph.add_edge(a, b, "Main St", "residential", 1.0),
	///     Err(GraphError::UnknownLocation(b))
	/// );
	///
	/// graph.add_vertex(b);
	/// assert!(graph.add_edge(a, b, "Main St", "residential", 1.0).is_ok());
	/// assert_eq!(graph.num_edges(), 1);
	/// ```
	pub fn add_edge(
		&mut self,
		from: GeographicPoint,
		to: GeographicPoint,
		road_name: impl Into<String>,
		road_type: impl Into<String>,
		length: f64,
	) -> Result<(), GraphError> {
		let src = self
			.nodes
			.id_at(from)
			.ok_or(GraphError::UnknownLocation(from))?;
		if self.nodes.id_at(to).is_none() {
			return Err(GraphError::UnknownLocation(to));
		}
		if !length.is_finite() || length < 0.0 {
			return Err(GraphError::InvalidLength(length));
		}
		if from == to && !self.config.allow_self_loops {
			return Err(GraphError::SelfLoop(from));
		}

		let edge = MapEdge::new(from, to, road_name, road_type, length);
		log::trace!("adding edge {}", edge);
		self.nodes.add_edge(src, edge);
		Ok(())
	}

	/// The number of vertices
	pub fn num_vertices(&self) -> usize {
		self.nodes.len()
	}

	/// The number of distinct Edges stored on the Nodes of this Graph.
	///
	/// This includes Edges added directly through a [`MapNode`] or one of its search wrappers.
	pub fn num_edges(&self) -> usize {
		self.iter().map(MapNode::edge_count).sum()
	}

	/// `true` if there is a vertex at `location`
	pub fn contains(&self, location: GeographicPoint) -> bool {
		self.nodes.id_at(location).is_some()
	}

	/// The locations of all vertices, in no particular order
	pub fn vertices(&self) -> impl Iterator<Item = GeographicPoint> + '_ {
		self.iter().map(MapNode::location)
	}

	/// All Nodes, in no particular order
	pub fn iter(&self) -> impl Iterator<Item = &MapNode> + '_ {
		self.nodes.iter().map(|(_, node)| node)
	}

	/// The Node at `location`
	pub fn node(&self, location: GeographicPoint) -> Option<&MapNode> {
		self.nodes.get(location)
	}

	/// The Node at `location`, for updating its search state
	pub fn node_mut(&mut self, location: GeographicPoint) -> Option<&mut MapNode> {
		self.nodes.get_mut(location)
	}

	/// The Nodes reachable over a single Edge from the vertex at `location`,
	/// or `None` if there is no such vertex.
	///
	/// Edges added directly through a [`MapNode`] may lead to locations that are not vertices
	/// of this Graph. Those endpoints are omitted here, while [`MapNode::neighbors`] still
	/// reports them.
	pub fn neighbors(&self, location: GeographicPoint) -> Option<Vec<&MapNode>> {
		let node = self.node(location)?;
		let neighbors = node
			.neighbors()
			.into_iter()
			.filter_map(|neighbor| self.node(neighbor))
			.collect();
		Some(neighbors)
	}

	/// `base` plus the distance between the vertices at `from` and `to`, measured in the
	/// Metric of the config. `None` if either location is not a vertex.
	pub fn predicted_cost(
		&self,
		from: GeographicPoint,
		to: GeographicPoint,
		base: f64,
	) -> Option<f64> {
		let from = self.node(from)?;
		let to = self.node(to)?;
		Some(from.compute_predicted_cost_with(to, base, self.config.metric))
	}

	/// Resets the search state of every Node, to prepare for a new search
	pub fn reset_costs(&mut self) {
		for (_, node) in self.nodes.iter_mut() {
			node.set_costs(SearchCosts::default());
		}
	}
}

impl Default for MapGraph {
	fn default() -> MapGraph {
		MapGraph::new()
	}
}
