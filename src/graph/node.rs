use super::MapEdge;
use crate::order::compare_costs;
use crate::{DistanceMetric, GeographicPoint, LocationSet};

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The set of outgoing Edges of a Node
pub type EdgeSet = hashbrown::HashSet<MapEdge>;

/// The search state carried by a single [`MapNode`] instance.
///
/// Unlike the edge set, this record is never shared between instances.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchCosts {
	/// The accumulated cost of reaching the Node from the search origin
	pub cost: f64,
	/// `cost` plus an estimate of the remaining distance to the goal
	pub predicted_cost: f64,
}

impl SearchCosts {
	/// Creates a new record from a cost and a predicted cost
	pub fn new(cost: f64, predicted_cost: f64) -> SearchCosts {
		SearchCosts {
			cost,
			predicted_cost,
		}
	}
}

/// A vertex of a road graph.
///
/// A Node is identified by its location: two Nodes are equal (and hash equally) if they are at
/// the same [`GeographicPoint`], no matter which Edges or costs they hold.
///
/// The outgoing Edges live in a set that is shared between a Node and every search wrapper
/// created from it through [`with_cost`](MapNode::with_cost) or
/// [`with_costs`](MapNode::with_costs). Edges added through any of them are visible through
/// all of them. The [`SearchCosts`] are owned by each instance.
///
/// ## Examples
/// ```
/// use road_graph::{GeographicPoint, MapEdge, MapNode};
///
/// let a = GeographicPoint::new(0.0, 0.0);
/// let b = GeographicPoint::new(3.0, 4.0);
///
/// let mut node = MapNode::new(a);
/// node.add_edge(MapEdge::new(a, b, "Main St", "residential", 7.0));
///
/// let state = node.with_cost(5.0);
/// assert_eq!(state, node);
/// assert_eq!(state.compute_cost(&MapNode::new(b)), 12.0);
/// assert_eq!(state.compute_predicted_cost(&MapNode::new(b), 5.0), 10.0);
/// ```
#[derive(Clone, Debug)]
pub struct MapNode {
	location: GeographicPoint,
	edges: Rc<RefCell<EdgeSet>>,
	costs: SearchCosts,
}

impl MapNode {
	/// Creates a new Node at `location` without any Edges
	pub fn new(location: GeographicPoint) -> MapNode {
		MapNode {
			location,
			edges: Rc::default(),
			costs: SearchCosts::default(),
		}
	}

	/// Creates a search wrapper around this Node with the given cost.
	///
	/// The wrapper shares the edge set of `self`. Its predicted cost starts at `0`.
	pub fn with_cost(&self, cost: f64) -> MapNode {
		self.with_costs(cost, 0.0)
	}

	/// Creates a search wrapper around this Node with the given cost and predicted cost.
	///
	/// The wrapper shares the edge set of `self`.
	pub fn with_costs(&self, cost: f64, predicted_cost: f64) -> MapNode {
		MapNode {
			location: self.location,
			edges: Rc::clone(&self.edges),
			costs: SearchCosts::new(cost, predicted_cost),
		}
	}

	/// The key that identifies this Node in hashed containers
	pub fn key(&self) -> GeographicPoint {
		self.location
	}

	/// The location of this Node
	pub fn location(&self) -> GeographicPoint {
		self.location
	}

	/// Adds an outgoing Edge.
	///
	/// Returns `false` if an equal Edge was already present, in which case nothing changes.
	pub fn add_edge(&mut self, edge: MapEdge) -> bool {
		self.edges.borrow_mut().insert(edge)
	}

	/// A snapshot of the outgoing Edges, in no particular order.
	///
	/// Later additions through any instance sharing the set are not reflected in it.
	pub fn edges(&self) -> Vec<MapEdge> {
		self.edges.borrow().iter().cloned().collect()
	}

	/// Calls `f` with the set of outgoing Edges, without copying it
	pub fn with_edges<R>(&self, f: impl FnOnce(&EdgeSet) -> R) -> R {
		f(&*self.edges.borrow())
	}

	/// The number of outgoing Edges
	pub fn edge_count(&self) -> usize {
		self.edges.borrow().len()
	}

	/// `true` if `self` and `other` share the same underlying edge set
	pub fn shares_edges_with(&self, other: &MapNode) -> bool {
		Rc::ptr_eq(&self.edges, &other.edges)
	}

	/// The locations on the other end of every outgoing Edge.
	///
	/// Computed fresh on every call. Edges that don't touch this Node are skipped.
	pub fn neighbors(&self) -> LocationSet {
		self.edges
			.borrow()
			.iter()
			.filter_map(|edge| edge.other_endpoint(self.location))
			.collect()
	}

	/// The accumulated cost of reaching this Node
	pub fn cost(&self) -> f64 {
		self.costs.cost
	}

	/// Sets the accumulated cost
	pub fn set_cost(&mut self, cost: f64) {
		self.costs.cost = cost;
	}

	/// The predicted total cost of a path through this Node
	pub fn predicted_cost(&self) -> f64 {
		self.costs.predicted_cost
	}

	/// Sets the predicted cost
	pub fn set_predicted_cost(&mut self, predicted_cost: f64) {
		self.costs.predicted_cost = predicted_cost;
	}

	/// The search state of this instance
	pub fn costs(&self) -> SearchCosts {
		self.costs
	}

	/// Replaces the search state of this instance
	pub fn set_costs(&mut self, costs: SearchCosts) {
		self.costs = costs;
	}

	/// Compares the accumulated costs of two Nodes, lowest first.
	///
	/// Costs that cannot be compared (`NaN`) are treated as equal.
	pub fn compare_cost(&self, other: &MapNode) -> Ordering {
		compare_costs(self.cost(), other.cost())
	}

	/// Compares the predicted costs of two Nodes, lowest first.
	///
	/// Costs that cannot be compared (`NaN`) are treated as equal.
	pub fn compare_predicted_cost(&self, other: &MapNode) -> Ordering {
		compare_costs(self.predicted_cost(), other.predicted_cost())
	}

	/// The cost of reaching `neighbor` through this Node, or `None` if no outgoing Edge leads
	/// to `neighbor`.
	///
	/// If several Edges lead to `neighbor`, the shortest one is used.
	pub fn try_compute_cost(&self, neighbor: &MapNode) -> Option<f64> {
		self.edges
			.borrow()
			.iter()
			.filter(|edge| edge.end() == neighbor.location)
			.map(MapEdge::length)
			.min_by(|a, b| compare_costs(*a, *b))
			.map(|length| self.cost() + length)
	}

	/// The cost of reaching `neighbor` through this Node.
	///
	/// If no outgoing Edge leads to `neighbor`, the cost of this Node is returned unchanged.
	/// Use [`try_compute_cost`](MapNode::try_compute_cost) to detect that case.
	pub fn compute_cost(&self, neighbor: &MapNode) -> f64 {
		self.try_compute_cost(neighbor).unwrap_or_else(|| {
			log::debug!(
				"no edge from ({}) to ({}), keeping cost {}",
				self.location,
				neighbor.location,
				self.cost()
			);
			self.cost()
		})
	}

	/// `cost` plus the straight-line distance between this Node and `neighbor`.
	pub fn compute_predicted_cost(&self, neighbor: &MapNode, cost: f64) -> f64 {
		self.compute_predicted_cost_with(neighbor, cost, DistanceMetric::Euclidean)
	}

	/// `cost` plus the distance between this Node and `neighbor`, measured in `metric`.
	pub fn compute_predicted_cost_with(
		&self,
		neighbor: &MapNode,
		cost: f64,
		metric: DistanceMetric,
	) -> f64 {
		metric.distance(&self.location, &neighbor.location) + cost
	}

	/// The names of all roads leaving this Node, sorted and without duplicates
	pub fn road_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self
			.edges
			.borrow()
			.iter()
			.map(|edge| edge.road_name().to_owned())
			.collect();
		names.sort_unstable();
		names.dedup();
		names
	}

	/// The road names of this Node as `(name, name, ...)`, for debugging
	pub fn road_names_as_string(&self) -> String {
		format!("({})", self.road_names().join(", "))
	}
}

impl PartialEq for MapNode {
	fn eq(&self, other: &MapNode) -> bool {
		self.location == other.location
	}
}
impl Eq for MapNode {}

impl Hash for MapNode {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.location.hash(state)
	}
}

impl fmt::Display for MapNode {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(
			fmt,
			"[NODE at location ({}) intersects streets: {}]",
			self.location,
			self.road_names().join(", ")
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::hash_map::DefaultHasher;

	fn point(lat: f64, lon: f64) -> GeographicPoint {
		GeographicPoint::new(lat, lon)
	}

	fn hash_of<T: Hash>(value: &T) -> u64 {
		let mut hasher = DefaultHasher::new();
		value.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn equality_ignores_edges_and_costs() {
		let mut a = MapNode::new(point(1.0, 2.0));
		a.add_edge(MapEdge::new(point(1.0, 2.0), point(3.0, 4.0), "A St", "", 1.0));
		a.set_cost(7.0);
		let b = MapNode::new(point(1.0, 2.0));

		assert_eq!(a, b);
		assert_ne!(a, MapNode::new(point(2.0, 1.0)));
	}

	#[test]
	fn hash_is_location_hash() {
		let location = point(32.7, -117.1);
		let mut node = MapNode::new(location);
		node.add_edge(MapEdge::new(location, point(0.0, 0.0), "B St", "", 3.0));

		assert_eq!(hash_of(&node), hash_of(&location));
	}

	#[test]
	fn duplicate_edges() {
		let (a, b) = (point(0.0, 0.0), point(0.0, 1.0));
		let mut node = MapNode::new(a);
		assert!(node.add_edge(MapEdge::new(a, b, "C St", "", 1.0)));
		assert!(!node.add_edge(MapEdge::new(a, b, "C St", "", 1.0)));
		assert!(node.add_edge(MapEdge::new(a, b, "D St", "", 1.0)));
		assert_eq!(node.edge_count(), 2);
	}

	#[test]
	fn neighbors() {
		let (a, x, y) = (point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0));
		let mut node = MapNode::new(a);
		node.add_edge(MapEdge::new(a, y, "E St", "", 1.0));
		node.add_edge(MapEdge::new(a, x, "F St", "", 1.0));
		node.add_edge(MapEdge::new(a, x, "G St", "", 2.0));

		let expected: LocationSet = [x, y].into_iter().collect();
		assert_eq!(node.neighbors(), expected);
	}

	#[test]
	fn search_wrappers_share_edges() {
		let (a, b) = (point(0.0, 0.0), point(0.0, 1.0));
		let mut node = MapNode::new(a);
		let mut wrapper = node.with_costs(4.0, 9.0);

		assert!(wrapper.shares_edges_with(&node));
		assert_eq!(wrapper.cost(), 4.0);
		assert_eq!(wrapper.predicted_cost(), 9.0);
		assert_eq!(node.costs(), SearchCosts::default());

		wrapper.add_edge(MapEdge::new(a, b, "H St", "", 1.0));
		assert_eq!(node.edge_count(), 1);
		node.add_edge(MapEdge::new(a, b, "I St", "", 1.0));
		assert_eq!(wrapper.edge_count(), 2);

		wrapper.set_cost(1.0);
		assert_eq!(node.cost(), 0.0);
		assert_eq!(node.with_cost(3.0).predicted_cost(), 0.0);
	}

	#[test]
	fn edge_snapshot() {
		let (a, b) = (point(0.0, 0.0), point(0.0, 1.0));
		let mut node = MapNode::new(a);
		let mut wrapper = node.with_cost(1.0);
		node.add_edge(MapEdge::new(a, b, "L St", "", 1.0));

		let edges = wrapper.edges();
		assert!(wrapper.add_edge(MapEdge::new(a, b, "M St", "", 2.0)));
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].road_name(), "L St");

		assert_eq!(node.with_edges(|set| set.len()), 2);
		let total: f64 = node.with_edges(|set| set.iter().map(MapEdge::length).sum());
		assert_eq!(total, 3.0);
	}

	#[test]
	fn compare() {
		let low = MapNode::new(point(0.0, 0.0)).with_costs(1.0, 8.0);
		let high = MapNode::new(point(1.0, 1.0)).with_costs(2.0, 3.0);

		assert_eq!(low.compare_cost(&high), Ordering::Less);
		assert_eq!(high.compare_cost(&low), Ordering::Greater);
		assert_eq!(low.compare_cost(&low.with_cost(1.0)), Ordering::Equal);

		assert_eq!(low.compare_predicted_cost(&high), Ordering::Greater);
		assert_eq!(high.compare_predicted_cost(&low), Ordering::Less);
		assert_eq!(
			high.compare_predicted_cost(&low.with_costs(0.0, 3.0)),
			Ordering::Equal
		);

		let nan = MapNode::new(point(2.0, 2.0)).with_cost(f64::NAN);
		assert_eq!(nan.compare_cost(&low), Ordering::Equal);
	}

	#[test]
	fn compute_cost() {
		let (a, b, c) = (point(0.0, 0.0), point(0.0, 1.0), point(5.0, 5.0));
		let mut node = MapNode::new(a);
		node.add_edge(MapEdge::new(a, b, "J St", "", 2.5));
		node.add_edge(MapEdge::new(a, b, "K St", "", 1.5));
		let node = node.with_cost(10.0);

		assert_eq!(node.compute_cost(&MapNode::new(b)), 11.5);
		assert_eq!(node.try_compute_cost(&MapNode::new(b)), Some(11.5));

		assert_eq!(node.compute_cost(&MapNode::new(c)), 10.0);
		assert_eq!(node.try_compute_cost(&MapNode::new(c)), None);
	}

	#[test]
	fn compute_predicted_cost() {
		let a = MapNode::new(point(0.0, 0.0)).with_cost(5.0);
		let b = MapNode::new(point(3.0, 4.0));

		assert!((a.compute_predicted_cost(&b, 5.0) - 10.0).abs() < 1e-9);
		assert!((b.compute_predicted_cost(&a, 0.5) - 5.5).abs() < 1e-9);
	}

	#[test]
	fn display() {
		let a = point(1.0, 2.0);
		let mut node = MapNode::new(a);
		assert_eq!(
			&format!("{}", node),
			"[NODE at location (Lat: 1, Lon: 2) intersects streets: ]"
		);
		assert_eq!(&node.road_names_as_string(), "()");

		node.add_edge(MapEdge::new(a, point(0.0, 0.0), "Main St", "", 1.0));
		node.add_edge(MapEdge::new(a, point(0.0, 1.0), "Elm St", "", 1.0));
		node.add_edge(MapEdge::new(a, point(0.0, 2.0), "Main St", "", 2.0));
		assert_eq!(
			&format!("{}", node),
			"[NODE at location (Lat: 1, Lon: 2) intersects streets: Elm St, Main St]"
		);
		assert_eq!(&node.road_names_as_string(), "(Elm St, Main St)");
	}
}
