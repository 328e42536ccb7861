use crate::{Cost, Point};

use std::fmt;
use std::ops::Index;

/// A Path found by the [`Pathfinder`](crate::Pathfinder)
///
/// Contains the Points to walk from the start to the goal, in order. The start itself is not
/// part of the Path, the goal is its last Point. A search where start and goal are the same Point
/// yields an empty Path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	steps: Vec<Point>,
	cost: Cost,
}

impl Path {
	/// creates a new Path with the given sequence of Points and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_pathfinder::Path;
	/// let path = Path::new(vec![(1, 0), (2, 0)], 2.0);
	///
	/// assert_eq!(path.len(), 2);
	/// assert_eq!(path.cost(), 2.0);
	/// ```
	pub fn new(steps: Vec<Point>, cost: Cost) -> Path {
		Path { steps, cost }
	}

	/// The total Cost of walking the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of steps in the Path
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// `true` if start and goal are the same Point
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// The first step of the Path
	pub fn first(&self) -> Option<Point> {
		self.steps.first().copied()
	}

	/// The last step of the Path, which is the goal
	pub fn last(&self) -> Option<Point> {
		self.steps.last().copied()
	}

	/// Returns an Iterator over the Points of the Path
	pub fn iter(&self) -> std::slice::Iter<'_, Point> {
		self.steps.iter()
	}

	/// The Points of the Path as a slice
	pub fn as_slice(&self) -> &[Point] {
		&self.steps
	}
}

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.steps[index]
	}
}

impl IntoIterator for Path {
	type Item = Point;
	type IntoIter = std::vec::IntoIter<Point>;
	fn into_iter(self) -> Self::IntoIter {
		self.steps.into_iter()
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Point;
	type IntoIter = std::slice::Iter<'a, Point>;
	fn into_iter(self) -> Self::IntoIter {
		self.steps.iter()
	}
}

impl PartialEq<Vec<Point>> for Path {
	fn eq(&self, rhs: &Vec<Point>) -> bool {
		self.steps == *rhs
	}
}

impl<'a> PartialEq<&'a [Point]> for Path {
	fn eq(&self, rhs: &&'a [Point]) -> bool {
		self.steps == *rhs
	}
}

impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {:.2}]: ", self.cost)?;
		if self.steps.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.steps[0])?;
			for p in self.steps.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
