//! Orderings of [`MapNode`]s for the priority queues of search algorithms.
//!
//! A Node carries two costs, and which one drives the search depends on the algorithm:
//! uniform-cost search (Dijkstra) orders by [`cost`](MapNode::cost), A* orders by
//! [`predicted_cost`](MapNode::predicted_cost). Instead of giving the Node a single built-in
//! ordering, this Module provides both as comparator functions and as [`SearchOrder`]
//! strategies for [`NodeQueue`].
//!
//! ## Examples
//! ```
//! use road_graph::{prelude::*, GeographicPoint};
//!
//! let node = |lat, cost, predicted| {
//!     MapNode::new(GeographicPoint::new(lat, 0.0)).with_costs(cost, predicted)
//! };
//!
//! let mut dijkstra = NodeQueue::<ByCost>::new();
//! let mut a_star = NodeQueue::<ByPredictedCost>::new();
//! for n in [node(1.0, 3.0, 4.0), node(2.0, 1.0, 9.0), node(3.0, 2.0, 2.5)] {
//!     dijkstra.push(n.clone());
//!     a_star.push(n);
//! }
//!
//! assert_eq!(dijkstra.pop().map(|n| n.cost()), Some(1.0));
//! assert_eq!(a_star.pop().map(|n| n.predicted_cost()), Some(2.5));
//! ```

use crate::{MapNode, SearchCosts};
use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Three-way comparison of two costs, lowest first. `NaN` compares equal to everything.
pub fn compare_costs(a: f64, b: f64) -> Ordering {
	a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compares two Nodes by their accumulated cost, lowest first
pub fn by_cost(a: &MapNode, b: &MapNode) -> Ordering {
	a.compare_cost(b)
}

/// Compares two Nodes by their predicted cost, lowest first
pub fn by_predicted_cost(a: &MapNode, b: &MapNode) -> Ordering {
	a.compare_predicted_cost(b)
}

/// Selects the cost that orders Nodes in a [`NodeQueue`]
pub trait SearchOrder: Clone + Debug {
	/// Extracts the ordering key from the search state of a Node
	fn key(costs: &SearchCosts) -> f64;

	/// Compares two Nodes by their key, lowest first
	fn compare(a: &MapNode, b: &MapNode) -> Ordering {
		compare_costs(Self::key(&a.costs()), Self::key(&b.costs()))
	}
}

/// Orders by [`SearchCosts::cost`], as used by uniform-cost search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByCost;

impl SearchOrder for ByCost {
	fn key(costs: &SearchCosts) -> f64 {
		costs.cost
	}
}

/// Orders by [`SearchCosts::predicted_cost`], as used by A*
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByPredictedCost;

impl SearchOrder for ByPredictedCost {
	fn key(costs: &SearchCosts) -> f64 {
		costs.predicted_cost
	}
}

#[derive(Clone, Debug)]
struct Entry {
	key: OrderedFloat<f64>,
	seq: u64,
	node: MapNode,
}

impl PartialEq for Entry {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for Entry {}
impl PartialOrd for Entry {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Entry {
	// reversed, because BinaryHeap is a max-heap
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.key
			.cmp(&self.key)
			.then_with(|| rhs.seq.cmp(&self.seq))
	}
}

/// A min-priority queue of [`MapNode`]s ordered by the strategy `O`.
///
/// The key of a Node is read when it is pushed; changing the costs of another instance of the
/// same Node afterwards does not reorder the queue. Nodes with equal keys are popped in the
/// order they were pushed, and Nodes with a `NaN` key are popped last.
#[derive(Clone, Debug)]
pub struct NodeQueue<O: SearchOrder> {
	heap: BinaryHeap<Entry>,
	next_seq: u64,
	order: PhantomData<O>,
}

impl<O: SearchOrder> NodeQueue<O> {
	/// Creates an empty queue
	pub fn new() -> NodeQueue<O> {
		NodeQueue::with_capacity(0)
	}

	/// Creates an empty queue with space for at least `capacity` Nodes
	pub fn with_capacity(capacity: usize) -> NodeQueue<O> {
		NodeQueue {
			heap: BinaryHeap::with_capacity(capacity),
			next_seq: 0,
			order: PhantomData,
		}
	}

	/// Adds a Node to the queue
	pub fn push(&mut self, node: MapNode) {
		let key = OrderedFloat(O::key(&node.costs()));
		let seq = self.next_seq;
		self.next_seq += 1;
		self.heap.push(Entry { key, seq, node });
	}

	/// Removes and returns the Node with the lowest key
	pub fn pop(&mut self) -> Option<MapNode> {
		self.heap.pop().map(|entry| entry.node)
	}

	/// The Node with the lowest key, without removing it
	pub fn peek(&self) -> Option<&MapNode> {
		self.heap.peek().map(|entry| &entry.node)
	}

	/// The number of Nodes in the queue
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// `true` if the queue contains no Nodes
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// Removes all Nodes
	pub fn clear(&mut self) {
		self.heap.clear();
		self.next_seq = 0;
	}
}

impl<O: SearchOrder> Default for NodeQueue<O> {
	fn default() -> NodeQueue<O> {
		NodeQueue::new()
	}
}

impl<O: SearchOrder> Extend<MapNode> for NodeQueue<O> {
	fn extend<I: IntoIterator<Item = MapNode>>(&mut self, iter: I) {
		for node in iter {
			self.push(node);
		}
	}
}

impl<O: SearchOrder> FromIterator<MapNode> for NodeQueue<O> {
	fn from_iter<I: IntoIterator<Item = MapNode>>(iter: I) -> NodeQueue<O> {
		let mut queue = NodeQueue::new();
		queue.extend(iter);
		queue
	}
}
