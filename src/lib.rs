#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths between two Cells of a 2D Grid.
//!
//! ## Introduction
//! The Grid is a rectangle of Cells that are either walkable or blocked. Every Cell knows its
//! straight-line distance to a single goal, which is used as the Heuristic of the search.
//!
//! The search itself is a best-first, depth-first variant of A*: from the current Cell, all
//! walkable neighbors (including the 4 diagonals) are collected, sorted by their estimated total
//! Cost and tried in that order, going as deep as possible before backtracking. Every Cell is
//! expanded at most once, which keeps the total work bounded by the number of walkable Cells.
//!
//! Since expanded Cells are never reopened, **the resulting Paths are not guaranteed to be the
//! cheapest ones**. They are, however, always valid and fully deterministic for a given input.
//!
//! ## Examples
//! Creating the Grid and searching it:
//! ```
//! use grid_pathfinder::prelude::*;
//!
//! // '.' = walkable, '#' = blocked
//! let rows = [
//!     ".....",
//!     ".###.",
//!     ".#...",
//!     ".#.#.",
//!     "...#.",
//! ];
//! let start = (0, 0);
//! let goal = (4, 4);
//!
//! let mut grid = Grid::from_rows(&rows, '.', goal).unwrap();
//! let mut pathfinder = Pathfinder::new(&mut grid);
//!
//! // search returns Ok(Some(Path)) on success
//! let path = pathfinder.search(start, goal).unwrap();
//! assert!(path.is_some());
//!
//! let path = path.unwrap();
//! assert_eq!(path.last(), Some(goal));
//!
//! // the Cells on the Path are marked in the Grid as well
//! assert!(grid.is_on_path(goal));
//! assert!(!grid.is_on_path(start));
//! ```
//!
//! If the goal cannot be reached, the search returns `Ok(None)`. Invalid input (ragged rows,
//! blocked or out-of-bounds endpoints) is reported as a [`PathfindingError`] before any search
//! work is done:
//! ```
//! use grid_pathfinder::prelude::*;
//!
//! let rows = ["..#..", "..#..", "..#.."];
//! assert_eq!(find_path(&rows, '.', (0, 0), (4, 2)).unwrap(), None);
//!
//! let err = find_path(&rows, '.', (2, 0), (4, 2)).unwrap_err();
//! assert!(matches!(err, PathfindingError::InvalidEndpoint { .. }));
//! ```
//!
//! ### Configuration
//! [`Pathfinder::with_config`] takes a [`SearchConfig`] to limit the depth of the search or to
//! forbid diagonal steps past blocked corners.
//! ```
//! use grid_pathfinder::prelude::*;
//!
//! let rows = ["...", ".#.", "..."];
//! let mut grid = Grid::from_rows(&rows, '.', (2, 2)).unwrap();
//!
//! let mut pathfinder = Pathfinder::with_config(&mut grid, SearchConfig::STRICT);
//! let path = pathfinder.search((0, 0), (2, 2)).unwrap().unwrap();
//!
//! // no diagonal step touches the blocked center
//! assert_eq!(path, vec![(1, 0), (2, 0), (2, 1), (2, 2)]);
//! ```
//!
//! ### Logging
//! With the `log` feature enabled, the search reports its progress and timings through the
//! [log](https://docs.rs/log) crate.

/// A shorthand for Points on the Grid: `(column, row)`.
///
/// The coordinates are signed so that neighbors of Cells on the border can be expressed, even
/// though they lie outside of the Grid.
pub type Point = (isize, isize);

/// The Type used to reference a Cell within its [`Grid`]: the row-major index of the Cell.
pub type CellId = usize;

/// The Type used for the accumulated Cost, the Heuristic and the combined Cost of a Cell.
pub type Cost = f32;

/// A [`HashSet`](hashbrown::HashSet) of Points, as returned by [`Grid::path_points`].
pub type PointSet = hashbrown::HashSet<Point>;

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
	($msg: literal, $timer: ident) => {
		let now = std::time::Instant::now();
		log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
		#[allow(unused)]
		let $timer = now;
	};
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
	// does nothing without log feature
	($msg: literal, $timer: ident) => {};
}

#[cfg(feature = "log")]
macro_rules! debug {
	($($arg: tt)+) => {
		log::debug!($($arg)+)
	};
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
	($($arg: tt)+) => {};
}

#[cfg(feature = "log")]
macro_rules! trace {
	($($arg: tt)+) => {
		log::trace!($($arg)+)
	};
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
	($($arg: tt)+) => {};
}

mod error;
pub use self::error::{Endpoint, EndpointIssue, PathfindingError, Result};

pub mod neighbors;

mod grid;
pub use self::grid::{Cell, Grid, VisitState};

mod path;
pub use self::path::Path;

mod pathfinder;
pub use self::pathfinder::{Pathfinder, SearchConfig};

/// Builds a [`Grid`] from text `rows` and searches it from `start` to `end`.
///
/// Every character equal to `walkable` is a walkable Cell, anything else is blocked.
/// This is a shorthand for [`Grid::from_rows`] followed by [`Pathfinder::search`] with the
/// default [`SearchConfig`]. Use those directly to access the marked Grid afterwards.
///
/// ## Examples
/// ```
/// # use grid_pathfinder::find_path;
/// let rows = ["...", ".#.", "..."];
/// let path = find_path(&rows, '.', (0, 0), (2, 2)).unwrap().unwrap();
///
/// assert_eq!(path, vec![(1, 0), (2, 1), (2, 2)]);
/// ```
pub fn find_path<S: AsRef<str>>(
	rows: &[S],
	walkable: char,
	start: Point,
	end: Point,
) -> Result<Option<Path>> {
	let mut grid = Grid::from_rows(rows, walkable, end)?;
	Pathfinder::new(&mut grid).search(start, end)
}

/// The most commonly used items of this crate.
pub mod prelude {
	pub use crate::{
		find_path, Cell, CellId, Cost, Endpoint, EndpointIssue, Grid, Path, Pathfinder,
		PathfindingError, Point, PointSet, SearchConfig, VisitState,
	};
}
