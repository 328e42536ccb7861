//! Helpers for moving between neighboring Points on the Grid

use crate::{Cost, Point};

/// The offsets to the 8 neighbors of a Point, in the order they are enumerated during a search.
///
/// Also known as the [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// The order is NW, N, NE, W, E, SW, S, SE, which is used to break ties between equally
/// promising neighbors.
///
/// ```no_code
/// 0 1 2
///  \|/
/// 3-A-4
///  /|\
/// 5 6 7
/// ```
pub const MOORE_OFFSETS: [Point; 8] = [
	(-1, -1),
	(0, -1),
	(1, -1),
	(-1, 0),
	(1, 0),
	(-1, 1),
	(0, 1),
	(1, 1),
];

/// Returns the 8 Points surrounding `point`, in the order of [`MOORE_OFFSETS`].
///
/// Note that the Points are not checked against the bounds of any Grid.
/// That check is done later.
pub fn moore_neighbors(point: Point) -> [Point; 8] {
	MOORE_OFFSETS.map(|(dx, dy)| (point.0 + dx, point.1 + dy))
}

/// `true` if `offset` moves along both axes at once
pub fn is_diagonal(offset: Point) -> bool {
	offset.0 != 0 && offset.1 != 0
}

/// The Euclidean (straight-line) distance between two Points
pub fn euclidean_distance(a: Point, b: Point) -> Cost {
	let dx = (b.0 - a.0) as Cost;
	let dy = (b.1 - a.1) as Cost;
	(dx * dx + dy * dy).sqrt()
}

#[test]
fn test_moore_neighbors() {
	assert_eq!(
		moore_neighbors((0, 2)),
		[
			(-1, 1),
			(0, 1),
			(1, 1),
			(-1, 2),
			(1, 2),
			(-1, 3),
			(0, 3),
			(1, 3)
		],
	);
}

#[test]
fn test_is_diagonal() {
	let diagonals: Vec<_> = MOORE_OFFSETS.iter().map(|&o| is_diagonal(o)).collect();
	assert_eq!(
		diagonals,
		vec![true, false, true, false, false, true, false, true]
	);
}

#[test]
fn test_euclidean_distance() {
	assert_eq!(euclidean_distance((0, 0), (3, 4)), 5.0);
	assert_eq!(euclidean_distance((2, 2), (2, 2)), 0.0);
	assert_eq!(
		euclidean_distance((1, 7), (-2, 3)),
		euclidean_distance((-2, 3), (1, 7))
	);
}
