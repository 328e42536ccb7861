//! Error types of the crate

use crate::Point;
use std::fmt;
use thiserror::Error;

/// Errors caused by invalid input. These are all detected before any search work is done.
///
/// Not finding a Path is not an error. [`Pathfinder::search`](crate::Pathfinder::search) returns
/// `Ok(None)` in that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathfindingError {
	/// The rows of a map do not all have the same length
	#[error("Malformed map: row {row} has length {found}, expected {expected}")]
	MalformedMap {
		/// index of the first offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},

	/// A Point lies outside of the Grid
	#[error("Point {point:?} is out of bounds of the {width}x{height} Grid")]
	OutOfBounds {
		/// the requested Point
		point: Point,
		/// width of the Grid
		width: usize,
		/// height of the Grid
		height: usize,
	},

	/// The start or end of a search cannot be used
	#[error("Invalid {endpoint} position {point:?}: {reason}")]
	InvalidEndpoint {
		/// which end of the search is invalid
		endpoint: Endpoint,
		/// the requested Point
		point: Point,
		/// why the Point was rejected
		reason: EndpointIssue,
	},
}

/// One of the two ends of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// the Point the search starts from
	Start,
	/// the Point the search is looking for
	End,
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Endpoint::Start => write!(f, "start"),
			Endpoint::End => write!(f, "end"),
		}
	}
}

/// The reason an [`Endpoint`] was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointIssue {
	/// the Point lies outside of the Grid
	OutOfBounds,
	/// the Cell at the Point is not walkable
	Blocked,
	/// the end differs from the goal the Grid was built for
	NotGoal,
}

impl fmt::Display for EndpointIssue {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			EndpointIssue::OutOfBounds => write!(f, "outside of the Grid"),
			EndpointIssue::Blocked => write!(f, "the Cell is not walkable"),
			EndpointIssue::NotGoal => write!(f, "the Grid was built for a different goal"),
		}
	}
}

/// Result type of fallible operations in this crate
pub type Result<T> = std::result::Result<T, PathfindingError>;
