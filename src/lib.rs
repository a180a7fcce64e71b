#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate for the vertices of road-network graphs.
//!
//! ## Introduction
//! Shortest-path searches on a road network (uniform-cost search, Dijkstra, A*) all work on the
//! same kind of vertex: a location on the map, the roads leaving it, and the cost the search has
//! accumulated so far. A* additionally keeps a predicted cost, which is the accumulated cost plus
//! a straight-line estimate of the remaining distance.
//!
//! This crate provides that vertex as [`MapNode`], together with the pieces a search algorithm
//! needs around it:
//! - [`GeographicPoint`], the location that identifies a Node
//! - [`MapEdge`], a directed road segment with a name and a length
//! - [`order`], comparator functions and a [`NodeQueue`] ordered by either cost
//! - [`MapGraph`], a container that owns the Nodes of a road graph
//!
//! The search algorithms themselves are left to the user.
//!
//! ## Examples
//! Building a Graph:
//! ```
//! use road_graph::{GeographicPoint, MapGraph};
//!
//! // A --5-- B
//! // |      /
//! // 4     3
//! // |   /
//! // C -
//! let a = GeographicPoint::new(0.0, 0.0);
//! let b = GeographicPoint::new(3.0, 4.0);
//! let c = GeographicPoint::new(0.0, 4.0);
//!
//! let mut graph = MapGraph::new();
//! for p in [a, b, c] {
//!     graph.add_vertex(p);
//! }
//! graph.add_edge(a, b, "Diagonal", "primary", 5.0).unwrap();
//! graph.add_edge(a, c, "North", "residential", 4.0).unwrap();
//! graph.add_edge(c, b, "East", "residential", 3.0).unwrap();
//!
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_edges(), 3);
//! assert_eq!(graph.neighbors(a).unwrap().len(), 2);
//! ```
//!
//! ### Search state
//! A search does not modify the Nodes of the Graph directly. Instead it creates wrappers with
//! [`MapNode::with_cost`] or [`MapNode::with_costs`]. A wrapper is equal to the Node it was
//! created from and shares its Edges, but owns its costs:
//! ```
//! # use road_graph::{GeographicPoint, MapGraph};
//! # let a = GeographicPoint::new(0.0, 0.0);
//! # let b = GeographicPoint::new(3.0, 4.0);
//! # let mut graph = MapGraph::new();
//! # graph.add_vertex(a);
//! # graph.add_vertex(b);
//! # graph.add_edge(a, b, "Diagonal", "primary", 5.0).unwrap();
//! let start = graph.node(a).unwrap().with_cost(0.0);
//! let goal = graph.node(b).unwrap();
//!
//! let cost = start.compute_cost(goal);
//! assert_eq!(cost, 5.0);
//!
//! let next = goal.with_costs(cost, goal.compute_predicted_cost(goal, cost));
//! assert_eq!(next, *goal);
//! assert_eq!(next.predicted_cost(), 5.0);
//! assert_eq!(goal.cost(), 0.0);
//! ```
//!
//! ### Ordering
//! Nodes have no built-in ordering. Searches pick one of the two orderings in [`order`]:
//! ```
//! use road_graph::{prelude::*, GeographicPoint};
//!
//! let mut open = NodeQueue::<ByCost>::new();
//! open.push(MapNode::new(GeographicPoint::new(1.0, 1.0)).with_cost(7.0));
//! open.push(MapNode::new(GeographicPoint::new(2.0, 2.0)).with_cost(3.0));
//!
//! assert_eq!(open.pop().unwrap().cost(), 3.0);
//! ```
//!
//! ### Configuration
//! The behavior of a [`MapGraph`] can be adjusted through a [`MapGraphConfig`]. The struct also
//! provides presets for planar coordinates [`MapGraphConfig::PLANAR`] and for real latitudes and
//! longitudes [`MapGraphConfig::GEODESIC`]:
//! ```
//! use road_graph::{GeographicPoint, MapGraph, MapGraphConfig};
//!
//! let london = GeographicPoint::new(51.5074, -0.1278);
//! let paris = GeographicPoint::new(48.8566, 2.3522);
//!
//! let mut graph = MapGraph::with_config(MapGraphConfig::GEODESIC);
//! graph.add_vertex(london);
//! graph.add_vertex(paris);
//!
//! let estimate = graph.predicted_cost(london, paris, 0.0).unwrap();
//! assert!((estimate - 343.5).abs() < 1.0);
//! ```
//!
//! ### Logging
//! The crate logs through the [`log`](https://docs.rs/log) facade. Graph mutations are logged
//! at `trace` level; rejected vertices and [`MapNode::compute_cost`] calls without a matching
//! Edge are logged at `debug` level.

mod geography;
pub use self::geography::{DistanceMetric, GeographicPoint, EARTH_RADIUS_KM};

mod graph;
pub use self::graph::{EdgeSet, MapEdge, MapNode, SearchCosts};

mod map_graph;
pub use self::map_graph::{GraphError, MapGraph, MapGraphConfig};

pub mod order;
pub use self::order::NodeQueue;

mod node_id;
pub use self::node_id::{LocationMap, LocationSet};
pub(crate) use self::node_id::NodeID;

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::order::{by_cost, by_predicted_cost, ByCost, ByPredictedCost, SearchOrder};
	pub use crate::{GraphError, MapEdge, MapGraph, MapGraphConfig, MapNode, NodeQueue};
}
