//! A Module with some utilities for referencing Nodes in the Graph

use crate::GeographicPoint;

/// The Type used to reference a Node inside of a [`MapGraph`](crate::MapGraph)
pub(crate) type NodeID = usize;

/// A [`HashMap`](hashbrown::HashMap) keyed by the location of a Node
pub type LocationMap<V> = hashbrown::HashMap<GeographicPoint, V>;
/// A [`HashSet`](hashbrown::HashSet) of Node locations
pub type LocationSet = hashbrown::HashSet<GeographicPoint>;
