use super::{MapEdge, MapNode};
use crate::{GeographicPoint, LocationMap, NodeID};

#[derive(Debug)]
pub(crate) struct NodeList {
	nodes: slab::Slab<MapNode>,
	location_map: LocationMap<NodeID>,
}

impl NodeList {
	pub fn new() -> Self {
		Self {
			nodes: slab::Slab::default(),
			location_map: LocationMap::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.location_map.len()
	}

	/// Inserts a new Node, or returns `None` if there already is one at `location`
	pub fn add_node(&mut self, location: GeographicPoint) -> Option<NodeID> {
		if self.location_map.contains_key(&location) {
			return None;
		}
		let id = self.nodes.insert(MapNode::new(location));
		self.location_map.insert(location, id);
		Some(id)
	}

	/// Adds `edge` to the Node at its start. Returns `false` if the Edge already existed.
	#[track_caller]
	pub fn add_edge(&mut self, src: NodeID, edge: MapEdge) -> bool {
		self[src].add_edge(edge)
	}

	pub fn iter(&self) -> slab::Iter<MapNode> {
		self.nodes.iter()
	}

	pub fn iter_mut(&mut self) -> slab::IterMut<MapNode> {
		self.nodes.iter_mut()
	}

	pub fn id_at(&self, location: GeographicPoint) -> Option<NodeID> {
		self.location_map.get(&location).copied()
	}

	pub fn get(&self, location: GeographicPoint) -> Option<&MapNode> {
		self.id_at(location).map(|id| &self[id])
	}

	pub fn get_mut(&mut self, location: GeographicPoint) -> Option<&mut MapNode> {
		let id = self.id_at(location)?;
		Some(&mut self[id])
	}
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
	type Output = MapNode;
	#[track_caller]
	fn index(&self, index: NodeID) -> &MapNode {
		&self.nodes[index]
	}
}
impl IndexMut<NodeID> for NodeList {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut MapNode {
		&mut self.nodes[index]
	}
}

#[test]
fn add_nodes_and_edges() {
	let mut nodes = NodeList::new();
	let (a, b) = (GeographicPoint::new(0.0, 0.0), GeographicPoint::new(1.0, 1.0));
	let a_id = nodes.add_node(a).unwrap();
	let b_id = nodes.add_node(b).unwrap();
	assert_eq!(nodes.add_node(a), None);
	assert_eq!(nodes.len(), 2);

	assert!(nodes.add_edge(a_id, MapEdge::new(a, b, "Main St", "", 1.0)));
	assert!(!nodes.add_edge(a_id, MapEdge::new(a, b, "Main St", "", 1.0)));

	assert_eq!(nodes.id_at(b), Some(b_id));
	assert_eq!(nodes[a_id].edge_count(), 1);
	assert_eq!(nodes.get(a).map(MapNode::location), Some(a));
	assert!(nodes.get(GeographicPoint::new(5.0, 5.0)).is_none());

	nodes.get_mut(b).unwrap().set_cost(3.0);
	assert_eq!(nodes[b_id].cost(), 3.0);
}
