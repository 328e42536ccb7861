mod cell;
pub use self::cell::{Cell, VisitState};

use crate::{neighbors, CellId, PathfindingError, Point, PointSet, Result};

use std::ops::{Index, IndexMut};

/// A rectangular Grid of [`Cell`]s, built for one goal
///
/// The Grid owns all of its Cells in a flat row-major list. Cells refer to each other only
/// through their [`CellId`], which is that index.
///
/// Since every Cell stores its distance to the goal, a Grid can only be searched towards the
/// goal it was built for. A new goal requires a new Grid.
#[derive(Clone, Debug)]
pub struct Grid {
	width: usize,
	height: usize,
	goal: Point,
	cells: Vec<Cell>,
}

impl Grid {
	/// Creates a new Grid
	///
	/// ## Arguments
	/// - `(width, height)` - the size of the Grid
	/// - `walkable` - whether the Cell at a Point can be walked over
	/// - `goal` - the Point all searches on this Grid will be looking for
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_pathfinder::Grid;
	/// // 0 = empty, 1 = wall
	/// let map = [
	///     [0, 1, 0],
	///     [0, 1, 0],
	///     [0, 0, 0],
	/// ];
	///
	/// let grid = Grid::new((3, 3), |(x, y)| map[y as usize][x as usize] == 0, (2, 0));
	///
	/// assert!(!grid[1].is_walkable());
	/// assert_eq!(grid.cell_at((2, 2)).unwrap().h(), 2.0);
	/// ```
	pub fn new(
		(width, height): (usize, usize),
		walkable: impl Fn(Point) -> bool,
		goal: Point,
	) -> Grid {
		let mut cells = Vec::with_capacity(width * height);
		for y in 0..height as isize {
			for x in 0..width as isize {
				cells.push(Cell::new((x, y), walkable((x, y)), goal));
			}
		}
		Grid {
			width,
			height,
			goal,
			cells,
		}
	}

	/// Creates a new Grid from rows of text
	///
	/// Every character equal to `walkable` becomes a walkable Cell, anything else is blocked.
	/// The width of the Grid is the length of the first row.
	///
	/// ## Errors
	/// [`PathfindingError::MalformedMap`] if the rows do not all have the same length.
	///
	/// ## Examples
	/// ```
	/// # use grid_pathfinder::{Grid, PathfindingError};
	/// let grid = Grid::from_rows(&["..X", "..."], '.', (0, 0)).unwrap();
	/// assert_eq!((grid.width(), grid.height()), (3, 2));
	/// assert!(!grid.cell_at((2, 0)).unwrap().is_walkable());
	///
	/// let err = Grid::from_rows(&["...", ".."], '.', (0, 0)).unwrap_err();
	/// assert_eq!(err, PathfindingError::MalformedMap { row: 1, expected: 3, found: 2 });
	/// ```
	pub fn from_rows<S: AsRef<str>>(rows: &[S], walkable: char, goal: Point) -> Result<Grid> {
		let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
		for (row, line) in rows.iter().enumerate() {
			let found = line.as_ref().chars().count();
			if found != width {
				return Err(PathfindingError::MalformedMap {
					row,
					expected: width,
					found,
				});
			}
		}

		let mut cells = Vec::with_capacity(width * rows.len());
		for (y, line) in rows.iter().enumerate() {
			for (x, c) in line.as_ref().chars().enumerate() {
				cells.push(Cell::new((x as isize, y as isize), c == walkable, goal));
			}
		}

		Ok(Grid {
			width,
			height: rows.len(),
			goal,
			cells,
		})
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// The total number of Cells
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// `true` if the Grid has no Cells at all
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// The goal this Grid was built for
	pub fn goal(&self) -> Point {
		self.goal
	}

	/// `true` if `point` lies within `[0, width) x [0, height)`
	pub fn contains(&self, point: Point) -> bool {
		point.0 >= 0
			&& point.1 >= 0
			&& (point.0 as usize) < self.width
			&& (point.1 as usize) < self.height
	}

	/// The [`CellId`] of the Cell at `point`, or `None` if `point` is out of bounds
	pub fn index_of(&self, point: Point) -> Option<CellId> {
		if self.contains(point) {
			Some(point.1 as usize * self.width + point.0 as usize)
		} else {
			None
		}
	}

	/// Returns the Cell at `point`
	///
	/// ## Errors
	/// [`PathfindingError::OutOfBounds`] if `point` lies outside of the Grid.
	pub fn cell_at(&self, point: Point) -> Result<&Cell> {
		let id = self.index_of(point).ok_or(PathfindingError::OutOfBounds {
			point,
			width: self.width,
			height: self.height,
		})?;
		Ok(&self.cells[id])
	}

	/// Returns the 8 Points surrounding `point`: NW, N, NE, W, E, SW, S, SE.
	///
	/// Points outside of the Grid are included. It is up to the caller to skip them.
	pub fn neighbors_of(&self, point: Point) -> [Point; 8] {
		neighbors::moore_neighbors(point)
	}

	/// Iterates over all Cells in row-major order
	pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
		self.cells.iter()
	}

	/// `true` if the Cell at `point` lies on the last Path found on this Grid.
	///
	/// Out-of-bounds Points are never on the Path.
	pub fn is_on_path(&self, point: Point) -> bool {
		self.index_of(point)
			.map_or(false, |id| self.cells[id].is_on_path())
	}

	/// The Points of all Cells on the last Path found on this Grid.
	///
	/// The start of the search is not included.
	pub fn path_points(&self) -> PointSet {
		self.cells
			.iter()
			.filter(|cell| cell.is_on_path())
			.map(|cell| cell.position())
			.collect()
	}

	/// Returns every Cell to the state it had before any search.
	///
	/// Position, walkability and Heuristic of the Cells are kept.
	pub fn reset_search_state(&mut self) {
		self.cells.iter_mut().for_each(Cell::reset);
	}

	/// Makes the Cell `parent` the parent of the Cell `child`, updating the Cost of `child`.
	pub(crate) fn set_parent(&mut self, child: CellId, parent: CellId) {
		let parent_cell = self.cells[parent];
		self.cells[child].set_parent(parent, &parent_cell);
	}
}

impl Index<CellId> for Grid {
	type Output = Cell;
	#[track_caller]
	fn index(&self, index: CellId) -> &Cell {
		&self.cells[index]
	}
}
impl IndexMut<CellId> for Grid {
	#[track_caller]
	fn index_mut(&mut self, index: CellId) -> &mut Cell {
		&mut self.cells[index]
	}
}
