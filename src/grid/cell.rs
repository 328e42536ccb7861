use crate::{neighbors::euclidean_distance, CellId, Cost, Point};

/// The checking state of a [`Cell`] during a search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VisitState {
	/// the Cell has not been reached yet
	#[default]
	Untested,
	/// the Cell was reached and may still be expanded
	Open,
	/// the Cell was expanded and is never considered again
	Closed,
}

/// A single Cell of the [`Grid`](crate::Grid)
///
/// Position, walkability and the Heuristic `h` are fixed when the Cell is created. The rest is
/// bookkeeping of the search that is written by the [`Pathfinder`](crate::Pathfinder).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
	position: Point,
	walkable: bool,
	state: VisitState,
	g: Cost,
	h: Cost,
	parent: Option<CellId>,
	on_path: bool,
}

impl Cell {
	/// Creates a new Cell at `position`, estimating its distance to `goal`.
	pub fn new(position: Point, walkable: bool, goal: Point) -> Cell {
		Cell {
			position,
			walkable,
			state: VisitState::Untested,
			g: 0.0,
			h: euclidean_distance(position, goal),
			parent: None,
			on_path: false,
		}
	}

	/// The Position of the Cell on the Grid
	pub fn position(&self) -> Point {
		self.position
	}

	/// `false` if the Cell can never be entered
	pub fn is_walkable(&self) -> bool {
		self.walkable
	}

	/// The current [`VisitState`] of the Cell
	pub fn state(&self) -> VisitState {
		self.state
	}

	/// The Cost of the best known Path from the start to this Cell.
	///
	/// Only meaningful for the start Cell and Cells that have a parent.
	pub fn g(&self) -> Cost {
		self.g
	}

	/// The straight-line distance from this Cell to the goal
	pub fn h(&self) -> Cost {
		self.h
	}

	/// The estimated total Cost of a Path through this Cell: `g + h`
	pub fn combined_cost(&self) -> Cost {
		self.g + self.h
	}

	/// The Cell this Cell was reached from, if any
	pub fn parent(&self) -> Option<CellId> {
		self.parent
	}

	/// `true` if the Cell lies on the Path found by the last successful search.
	///
	/// The start Cell of a search is never marked.
	pub fn is_on_path(&self) -> bool {
		self.on_path
	}

	/// Returns the Euclidean (straight-line) distance between this Cell and `target`
	pub fn euclidean_distance(&self, target: Point) -> Cost {
		euclidean_distance(self.position, target)
	}

	/// Sets `parent` (with the id `id`) as the parent of this Cell and updates `g` accordingly.
	///
	/// `g` becomes the `g` of the parent plus the distance between the two Cells.
	pub fn set_parent(&mut self, id: CellId, parent: &Cell) {
		debug_assert!(
			self.state != VisitState::Closed,
			"Closed Cell at {:?} must not be reparented",
			self.position
		);
		self.parent = Some(id);
		self.g = parent.g + self.euclidean_distance(parent.position);
	}

	pub(crate) fn set_state(&mut self, state: VisitState) {
		self.state = state;
	}

	pub(crate) fn mark_on_path(&mut self) {
		self.on_path = true;
	}

	/// forgets everything a previous search wrote into this Cell
	pub(crate) fn reset(&mut self) {
		self.state = VisitState::Untested;
		self.g = 0.0;
		self.parent = None;
		self.on_path = false;
	}
}
