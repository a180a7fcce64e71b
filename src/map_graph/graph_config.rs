use crate::DistanceMetric;

/// Options for configuring a [`MapGraph`](crate::MapGraph)
///
/// Default options:
/// ```
/// # use road_graph::{DistanceMetric, MapGraphConfig};
/// assert_eq!(
/// 	MapGraphConfig {
/// 		metric: DistanceMetric::Euclidean,
/// 		allow_self_loops: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapGraphConfig {
	/// The Metric used by [`MapGraph::predicted_cost`](crate::MapGraph::predicted_cost)
	/// (defaults to [`DistanceMetric::Euclidean`])
	pub metric: DistanceMetric,
	/// `true` (default): Edges may start and end at the same location.
	///
	/// `false`: [`MapGraph::add_edge`](crate::MapGraph::add_edge) rejects such Edges with
	/// [`GraphError::SelfLoop`](crate::GraphError::SelfLoop).
	pub allow_self_loops: bool,
}

impl MapGraphConfig {
	/// a MapGraphConfig for graphs whose coordinates are planar
	///
	/// Values:
	/// ```
	/// # use road_graph::{DistanceMetric, MapGraphConfig};
	/// assert_eq!(
	/// 	MapGraphConfig {
	/// 		metric: DistanceMetric::Euclidean,
	/// 		allow_self_loops: true,
	/// 	},
	/// 	MapGraphConfig::PLANAR
	/// );
	/// ```
	pub const PLANAR: MapGraphConfig = MapGraphConfig {
		metric: DistanceMetric::Euclidean,
		allow_self_loops: true,
	};
	/// a MapGraphConfig for graphs of real latitudes and longitudes, with Edge lengths in
	/// kilometres
	///
	/// Values:
	/// ```
	/// # use road_graph::{DistanceMetric, MapGraphConfig};
	/// assert_eq!(
	/// 	MapGraphConfig {
	/// 		metric: DistanceMetric::Haversine,
	/// 		allow_self_loops: false,
	/// 	},
	/// 	MapGraphConfig::GEODESIC
	/// );
	/// ```
	pub const GEODESIC: MapGraphConfig = MapGraphConfig {
		metric: DistanceMetric::Haversine,
		allow_self_loops: false,
	};
}

impl Default for MapGraphConfig {
	fn default() -> MapGraphConfig {
		MapGraphConfig::PLANAR
	}
}
