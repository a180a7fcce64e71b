//! A Module for geographic coordinates and the distance functions between them

use ordered_float::OrderedFloat;
use std::fmt;

/// The mean radius of the earth in kilometres, used by [`GeographicPoint::haversine_distance`]
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair that identifies a vertex in a road graph.
///
/// Points are immutable and can be used as keys in hashed containers: equality and hashing
/// treat both coordinates as total floats, so `NaN` equals `NaN` and `-0.0` equals `0.0`.
///
/// ## Examples
/// ```
/// # use road_graph::GeographicPoint;
/// let a = GeographicPoint::new(0.0, 0.0);
/// let b = GeographicPoint::new(3.0, 4.0);
///
/// assert_eq!(a.distance(&b), 5.0);
/// assert_eq!(format!("{}", b), "Lat: 3, Lon: 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GeographicPoint {
	latitude: OrderedFloat<f64>,
	longitude: OrderedFloat<f64>,
}

impl GeographicPoint {
	/// Creates a new Point from a latitude and a longitude
	pub fn new(latitude: f64, longitude: f64) -> GeographicPoint {
		GeographicPoint {
			latitude: OrderedFloat(latitude),
			longitude: OrderedFloat(longitude),
		}
	}

	/// The latitude of this Point
	pub fn latitude(&self) -> f64 {
		self.latitude.0
	}

	/// The longitude of this Point
	pub fn longitude(&self) -> f64 {
		self.longitude.0
	}

	/// The straight-line distance to `other`, measured in coordinate units.
	pub fn distance(&self, other: &GeographicPoint) -> f64 {
		let d_lat = self.latitude() - other.latitude();
		let d_lon = self.longitude() - other.longitude();
		d_lat.hypot(d_lon)
	}

	/// The great-circle distance to `other` in kilometres.
	pub fn haversine_distance(&self, other: &GeographicPoint) -> f64 {
		let lat1 = self.latitude().to_radians();
		let lat2 = other.latitude().to_radians();
		let d_lat = (other.latitude() - self.latitude()).to_radians();
		let d_lon = (other.longitude() - self.longitude()).to_radians();

		let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
		let c = 2.0 * a.sqrt().asin();

		EARTH_RADIUS_KM * c
	}
}

impl From<(f64, f64)> for GeographicPoint {
	fn from((latitude, longitude): (f64, f64)) -> GeographicPoint {
		GeographicPoint::new(latitude, longitude)
	}
}

impl fmt::Display for GeographicPoint {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Lat: {}, Lon: {}", self.latitude(), self.longitude())
	}
}

/// The Metric used to estimate the remaining distance between two Points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DistanceMetric {
	/// Straight-line distance in coordinate units. See [`GeographicPoint::distance`]
	#[default]
	Euclidean,
	/// Great-circle distance in kilometres. See [`GeographicPoint::haversine_distance`]
	Haversine,
}

impl DistanceMetric {
	/// Measures the distance between `a` and `b` in this Metric
	pub fn distance(self, a: &GeographicPoint, b: &GeographicPoint) -> f64 {
		match self {
			DistanceMetric::Euclidean => a.distance(b),
			DistanceMetric::Haversine => a.haversine_distance(b),
		}
	}
}
