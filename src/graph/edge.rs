use crate::GeographicPoint;
use ordered_float::OrderedFloat;
use std::fmt;

/// A directed road segment from `start` to `end`.
///
/// Two Edges are equal if all of their fields are equal. This is what gives a Node's edge set
/// its duplicate-free semantics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapEdge {
	start: GeographicPoint,
	end: GeographicPoint,
	road_name: String,
	road_type: String,
	length: OrderedFloat<f64>,
}

impl MapEdge {
	/// Creates a new Edge
	///
	/// ## Arguments
	/// - `start` - the location the Edge leaves from
	/// - `end` - the location the Edge leads to
	/// - `road_name` - the name of the road, e.g. `"Main Street"`
	/// - `road_type` - the kind of road, e.g. `"residential"`
	/// - `length` - the length of the road segment
	pub fn new(
		start: GeographicPoint,
		end: GeographicPoint,
		road_name: impl Into<String>,
		road_type: impl Into<String>,
		length: f64,
	) -> MapEdge {
		MapEdge {
			start,
			end,
			road_name: road_name.into(),
			road_type: road_type.into(),
			length: OrderedFloat(length),
		}
	}

	/// The location this Edge leaves from
	pub fn start(&self) -> GeographicPoint {
		self.start
	}

	/// The location this Edge leads to
	pub fn end(&self) -> GeographicPoint {
		self.end
	}

	/// The name of the road
	pub fn road_name(&self) -> &str {
		&self.road_name
	}

	/// The kind of road
	pub fn road_type(&self) -> &str {
		&self.road_type
	}

	/// The length of the road segment
	pub fn length(&self) -> f64 {
		self.length.0
	}

	/// Returns the endpoint on the other side of `location`, or `None` if `location` is not
	/// an endpoint of this Edge.
	pub fn other_endpoint(&self, location: GeographicPoint) -> Option<GeographicPoint> {
		if location == self.start {
			Some(self.end)
		} else if location == self.end {
			Some(self.start)
		} else {
			None
		}
	}
}

impl fmt::Display for MapEdge {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(
			fmt,
			"{} ({}) -> ({}), length {}",
			self.road_name, self.start, self.end, self.length
		)
	}
}
