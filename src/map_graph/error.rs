use crate::GeographicPoint;
use thiserror::Error;

/// The reasons an Edge can be rejected by a [`MapGraph`](crate::MapGraph)
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
	/// An endpoint of the Edge is not a vertex of the Graph
	#[error("no vertex at location ({0})")]
	UnknownLocation(GeographicPoint),
	/// The length of the Edge is negative, infinite or NaN
	#[error("invalid edge length {0}")]
	InvalidLength(f64),
	/// The Edge starts and ends at the same location, and the config forbids that
	#[error("self-loop at location ({0})")]
	SelfLoop(GeographicPoint),
}
