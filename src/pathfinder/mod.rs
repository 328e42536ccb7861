mod search_config;
pub use self::search_config::SearchConfig;

use crate::{
	neighbors::{is_diagonal, MOORE_OFFSETS},
	CellId, Endpoint, EndpointIssue, Grid, Path, PathfindingError, Point, Result, VisitState,
};

/// Searches a [`Grid`] for a Path between two of its Cells.
///
/// The search is a best-first variant of a depth-first search:
/// 1. The current Cell is closed.
/// 2. Its walkable, not yet closed neighbors become candidates. Untested neighbors are reached
/// through the current Cell. Open neighbors are only reparented (and become candidates) if the
/// current Cell offers a strictly cheaper way to them.
/// 3. The candidates are sorted by their estimated total Cost `g + h`. Ties keep the order of
/// [`MOORE_OFFSETS`].
/// 4. The candidates are tried in that order. Reaching the goal ends the search, any other
/// candidate is expanded recursively. A branch without success is abandoned (backtracking).
///
/// Closed Cells are never reopened, even when a cheaper way to them is found later. Every Cell
/// is therefore expanded at most once, but **the resulting Path is not necessarily the cheapest
/// one**.
///
/// The recursion is driven by an explicit stack on the heap, so even huge Grids don't overflow
/// the call stack.
///
/// The Pathfinder holds the only mutable reference to the Grid while it exists. The bookkeeping
/// of the search (visit states, Costs, parents, Path marks) is written into the Grid and can be
/// inspected after the Pathfinder is dropped.
#[derive(Debug)]
pub struct Pathfinder<'a> {
	grid: &'a mut Grid,
	config: SearchConfig,
	/// every Cell passed to `expand`, in order
	#[cfg(test)]
	expanded: Vec<CellId>,
}

/// One level of the depth-first search: the sorted candidates of an expanded Cell
#[derive(Debug)]
struct Frame {
	candidates: Vec<CellId>,
	next: usize,
}

impl Frame {
	fn next_candidate(&mut self) -> Option<CellId> {
		let candidate = self.candidates.get(self.next).copied();
		self.next += 1;
		candidate
	}
}

impl<'a> Pathfinder<'a> {
	/// Creates a new Pathfinder on `grid` with the default [`SearchConfig`]
	pub fn new(grid: &'a mut Grid) -> Pathfinder<'a> {
		Pathfinder::with_config(grid, SearchConfig::default())
	}

	/// Creates a new Pathfinder on `grid` with the given [`SearchConfig`]
	pub fn with_config(grid: &'a mut Grid, config: SearchConfig) -> Pathfinder<'a> {
		Pathfinder {
			grid,
			config,
			#[cfg(test)]
			expanded: Vec::new(),
		}
	}

	/// The config of this Pathfinder
	pub fn config(&self) -> SearchConfig {
		self.config
	}

	/// The Grid this Pathfinder searches
	pub fn grid(&self) -> &Grid {
		&*self.grid
	}

	/// Searches a Path from `start` to `end`.
	///
	/// Returns `Ok(Some(path))` if a Path was found. The Cells of the Path are then also marked
	/// in the Grid (see [`Cell::is_on_path`](crate::Cell::is_on_path)), except for the start.
	/// Returns `Ok(None)` if `end` cannot be reached from `start`.
	///
	/// Anything a previous search wrote into the Grid is reset first, so the same Grid can be
	/// searched several times, as long as `end` stays its goal.
	///
	/// ## Errors
	/// [`PathfindingError::InvalidEndpoint`] if `start` or `end` lie outside of the Grid or are
	/// not walkable, or if `end` is not the goal the Grid was built for. The Grid is left
	/// untouched in that case.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_pathfinder::prelude::*;
	/// let rows = [
	///     "...",
	///     ".#.",
	///     "...",
	/// ];
	/// let mut grid = Grid::from_rows(&rows, '.', (2, 2)).unwrap();
	///
	/// let path = Pathfinder::new(&mut grid).search((0, 0), (2, 2)).unwrap().unwrap();
	/// assert_eq!(path, vec![(1, 0), (2, 1), (2, 2)]);
	/// assert!((path.cost() - (2.0 + 2f32.sqrt())).abs() < 1e-5);
	///
	/// assert!(grid.is_on_path((2, 1)));
	/// assert!(!grid.is_on_path((1, 1)));
	/// ```
	pub fn search(&mut self, start: Point, end: Point) -> Result<Option<Path>> {
		#[cfg(feature = "log")]
		let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

		let start_id = self.validate(Endpoint::Start, start)?;
		let end_id = self.validate(Endpoint::End, end)?;

		self.grid.reset_search_state();

		debug!(
			"searching {:?} -> {:?} on a {}x{} Grid",
			start,
			end,
			self.grid.width(),
			self.grid.height()
		);

		if start_id == end_id {
			debug!("start is the goal");
			return Ok(Some(Path::new(vec![], 0.0)));
		}

		let found = self.run(start_id, end_id);

		re_trace!("search", timer);

		if !found {
			debug!("no Path from {:?} to {:?}", start, end);
			re_trace!("search total", outer_timer);
			return Ok(None);
		}

		let path = self.mark_path(end_id);

		re_trace!("mark path", timer);
		debug!("found {}", path);
		re_trace!("search total", outer_timer);

		Ok(Some(path))
	}

	fn validate(&self, endpoint: Endpoint, point: Point) -> Result<CellId> {
		let invalid = |reason: EndpointIssue| PathfindingError::InvalidEndpoint {
			endpoint,
			point,
			reason,
		};

		let id = self
			.grid
			.index_of(point)
			.ok_or_else(|| invalid(EndpointIssue::OutOfBounds))?;
		if !self.grid[id].is_walkable() {
			return Err(invalid(EndpointIssue::Blocked));
		}
		if endpoint == Endpoint::End && point != self.grid.goal() {
			return Err(invalid(EndpointIssue::NotGoal));
		}
		Ok(id)
	}

	/// the depth-first part of the search, returns whether `goal` was reached
	fn run(&mut self, start: CellId, goal: CellId) -> bool {
		let mut stack = vec![self.expand(start)];

		while let Some(frame) = stack.last_mut() {
			let Some(candidate) = frame.next_candidate() else {
				stack.pop();
				continue;
			};

			if candidate == goal {
				return true;
			}
			if !self.can_expand(candidate, stack.len()) {
				continue;
			}

			let frame = self.expand(candidate);
			stack.push(frame);
		}

		false
	}

	/// whether `candidate` may be expanded on top of `depth` frames
	fn can_expand(&self, candidate: CellId, depth: usize) -> bool {
		// a Cell is expanded at most once, even if it is still listed in an older frame
		if self.grid[candidate].state() == VisitState::Closed {
			return false;
		}
		if let Some(max_depth) = self.config.max_depth {
			if depth >= max_depth {
				trace!(
					"depth limit reached at {:?}",
					self.grid[candidate].position()
				);
				return false;
			}
		}
		true
	}

	/// closes `current` and collects its sorted candidates
	fn expand(&mut self, current: CellId) -> Frame {
		#[cfg(test)]
		self.expanded.push(current);

		self.grid[current].set_state(VisitState::Closed);
		let position = self.grid[current].position();
		let current_g = self.grid[current].g();

		let mut candidates = Vec::with_capacity(MOORE_OFFSETS.len());

		for (offset, neighbor) in MOORE_OFFSETS.into_iter().zip(self.grid.neighbors_of(position)) {
			let Some(id) = self.grid.index_of(neighbor) else {
				continue;
			};
			let cell = self.grid[id];
			if !cell.is_walkable() || cell.state() == VisitState::Closed {
				continue;
			}
			if !self.config.corner_cutting
				&& is_diagonal(offset)
				&& !self.passes_corners(position, offset)
			{
				continue;
			}

			match cell.state() {
				VisitState::Untested => {
					self.grid.set_parent(id, current);
					self.grid[id].set_state(VisitState::Open);
					candidates.push(id);
				}
				VisitState::Open => {
					let g = current_g + cell.euclidean_distance(position);
					if g < cell.g() {
						self.grid.set_parent(id, current);
						candidates.push(id);
					}
				}
				VisitState::Closed => {}
			}
		}

		candidates.sort_by(|&a, &b| {
			let (a, b) = (&self.grid[a], &self.grid[b]);
			a.combined_cost().total_cmp(&b.combined_cost())
		});

		trace!(
			"expanded {:?} (g = {}): {} candidates",
			position,
			current_g,
			candidates.len()
		);

		Frame {
			candidates,
			next: 0,
		}
	}

	/// `true` if both Cells orthogonally adjacent to the diagonal step `offset` are walkable
	fn passes_corners(&self, from: Point, offset: Point) -> bool {
		[(from.0 + offset.0, from.1), (from.0, from.1 + offset.1)]
			.into_iter()
			.all(|p| self.grid.cell_at(p).map_or(false, |cell| cell.is_walkable()))
	}

	/// follows the parents from `goal` back to the start, marking every Cell on the way
	fn mark_path(&mut self, goal: CellId) -> Path {
		let mut steps = vec![];
		let mut current = goal;

		while let Some(parent) = self.grid[current].parent() {
			self.grid[current].mark_on_path();
			steps.push(self.grid[current].position());
			current = parent;
		}
		steps.reverse();

		Path::new(steps, self.grid[goal].g())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::PointSet;

	fn init() {
		let _ = env_logger::builder().is_test(true).try_init();
	}

	fn grid(rows: &[&str], goal: Point) -> Grid {
		Grid::from_rows(rows, '.', goal).unwrap()
	}

	#[test]
	fn open_grid_takes_the_diagonal() {
		init();
		let mut grid = grid(&["....."; 5], (4, 4));

		let path = Pathfinder::new(&mut grid).search((0, 0), (4, 4)).unwrap();
		let path = path.unwrap();

		assert_eq!(path, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
		assert!((path.cost() - 4.0 * 2f32.sqrt()).abs() < 1e-5);
	}

	#[test]
	fn around_blocked_center() {
		init();
		let mut grid = grid(&["...", ".#.", "..."], (2, 2));

		let path = Pathfinder::new(&mut grid).search((0, 0), (2, 2)).unwrap();

		assert_eq!(path.unwrap(), vec![(1, 0), (2, 1), (2, 2)]);
		let expected: PointSet = [(1, 0), (2, 1), (2, 2)].into_iter().collect();
		assert_eq!(grid.path_points(), expected);
	}

	#[test]
	fn around_blocked_center_strict() {
		init();
		let mut grid = grid(&["...", ".#.", "..."], (2, 2));

		let path = Pathfinder::with_config(&mut grid, SearchConfig::STRICT)
			.search((0, 0), (2, 2))
			.unwrap();

		assert_eq!(path.unwrap(), vec![(1, 0), (2, 0), (2, 1), (2, 2)]);
	}

	#[test]
	fn strict_blocks_diagonal_gap() {
		init();
		// the only connection is a diagonal squeeze between two walls
		let rows = ["..#", "..#", "##."];

		let mut grid = grid(&rows, (2, 2));
		let path = Pathfinder::new(&mut grid).search((0, 0), (2, 2)).unwrap();
		assert_eq!(path.unwrap().last(), Some((2, 2)));

		let mut grid = self::grid(&rows, (2, 2));
		let path = Pathfinder::with_config(&mut grid, SearchConfig::STRICT)
			.search((0, 0), (2, 2))
			.unwrap();
		assert_eq!(path, None);
	}

	#[test]
	fn unreachable_goal() {
		init();
		let mut grid = grid(&["..#..", "..#..", "..#.."], (4, 2));

		let path = Pathfinder::new(&mut grid).search((0, 0), (4, 2)).unwrap();

		assert_eq!(path, None);
		assert!(grid.path_points().is_empty());
		// every reachable Cell was expanded
		for cell in grid.cells() {
			let expected = if cell.position().0 < 2 {
				VisitState::Closed
			} else {
				VisitState::Untested
			};
			assert_eq!(cell.state(), expected, "at {:?}", cell.position());
		}
	}

	#[test]
	fn start_is_goal() {
		init();
		let mut grid = grid(&["...", "..."], (1, 1));

		let path = Pathfinder::new(&mut grid).search((1, 1), (1, 1)).unwrap();

		let path = path.unwrap();
		assert!(path.is_empty());
		assert_eq!(path.cost(), 0.0);
		assert!(grid.path_points().is_empty());
	}

	#[test]
	fn invalid_endpoints() {
		init();
		let mut grid = grid(&["..#", "..."], (2, 1));
		let mut pathfinder = Pathfinder::new(&mut grid);

		let cases = [
			((-1, 0), (2, 1), Endpoint::Start, EndpointIssue::OutOfBounds),
			((2, 0), (2, 1), Endpoint::Start, EndpointIssue::Blocked),
			((0, 0), (3, 1), Endpoint::End, EndpointIssue::OutOfBounds),
			((0, 0), (2, 0), Endpoint::End, EndpointIssue::Blocked),
			((0, 0), (1, 1), Endpoint::End, EndpointIssue::NotGoal),
		];
		for (start, end, endpoint, reason) in cases {
			let point = if endpoint == Endpoint::Start { start } else { end };
			assert_eq!(
				pathfinder.search(start, end).unwrap_err(),
				PathfindingError::InvalidEndpoint {
					endpoint,
					point,
					reason
				}
			);
		}

		// nothing was touched
		assert!(pathfinder
			.grid()
			.cells()
			.all(|cell| cell.state() == VisitState::Untested));
	}

	#[test]
	fn max_depth() {
		init();
		let rows = ["......"];

		let mut grid = grid(&rows, (3, 0));
		let config = SearchConfig::with_max_depth(3);
		let path = Pathfinder::with_config(&mut grid, config)
			.search((0, 0), (3, 0))
			.unwrap();
		assert_eq!(path.unwrap(), vec![(1, 0), (2, 0), (3, 0)]);

		let mut grid = self::grid(&rows, (4, 0));
		let path = Pathfinder::with_config(&mut grid, config)
			.search((0, 0), (4, 0))
			.unwrap();
		assert_eq!(path, None);
		assert_eq!(grid.cell_at((3, 0)).unwrap().state(), VisitState::Open);

		let mut grid = self::grid(&rows, (4, 0));
		let path = Pathfinder::new(&mut grid).search((0, 0), (4, 0)).unwrap();
		assert_eq!(path.unwrap().len(), 4);
	}

	#[test]
	fn grid_can_be_searched_again() {
		init();
		let rows = [".....", ".###.", "....."];

		let mut reused = grid(&rows, (4, 2));
		let mut pathfinder = Pathfinder::new(&mut reused);
		pathfinder.search((0, 0), (4, 2)).unwrap().unwrap();
		let second = pathfinder.search((4, 0), (4, 2)).unwrap();

		let mut fresh = grid(&rows, (4, 2));
		let expected = Pathfinder::new(&mut fresh).search((4, 0), (4, 2)).unwrap();

		assert_eq!(second, expected);
		assert_eq!(reused.path_points(), fresh.path_points());
		assert!(reused.cells().eq(fresh.cells()));
	}

	#[test]
	fn parents_are_closed_and_consistent() {
		init();
		let rows = [".....", ".#.#.", ".....", "##.#.", "....."];
		let mut grid = grid(&rows, (4, 4));
		Pathfinder::new(&mut grid).search((0, 0), (4, 4)).unwrap().unwrap();

		for cell in grid.cells() {
			if let Some(parent) = cell.parent() {
				let parent = &grid[parent];
				assert_eq!(parent.state(), VisitState::Closed);
				assert_eq!(
					cell.g(),
					parent.g() + cell.euclidean_distance(parent.position())
				);
			}
		}
		assert_eq!(grid.cell_at((0, 0)).unwrap().parent(), None);
	}

	#[test]
	fn open_neighbor_reparented_when_cheaper() {
		init();
		let mut grid = grid(&["...", "...", "..."], (2, 2));
		let id = |x: usize, y: usize| y * 3 + x;

		// (0, 0) -> (0, 1) -> (0, 2) closed, (1, 2) reached the long way round with g = 3
		grid[id(0, 0)].set_state(VisitState::Closed);
		for (child, parent) in [(id(0, 1), id(0, 0)), (id(0, 2), id(0, 1))] {
			grid.set_parent(child, parent);
			grid[child].set_state(VisitState::Closed);
		}
		grid.set_parent(id(1, 2), id(0, 2));
		grid[id(1, 2)].set_state(VisitState::Open);
		assert_eq!(grid[id(1, 2)].g(), 3.0);

		// (1, 0) is Open with g = 1, which (1, 1) cannot beat
		grid.set_parent(id(1, 0), id(0, 0));
		grid[id(1, 0)].set_state(VisitState::Open);

		grid.set_parent(id(1, 1), id(0, 0));
		grid[id(1, 1)].set_state(VisitState::Open);

		let mut pathfinder = Pathfinder::new(&mut grid);
		let frame = pathfinder.expand(id(1, 1));

		assert!(frame.candidates.contains(&id(1, 2)));
		assert!(!frame.candidates.contains(&id(1, 0)));
		assert_eq!(
			frame.candidates,
			vec![id(2, 2), id(2, 1), id(1, 2), id(2, 0)]
		);

		let reached = &grid[id(1, 2)];
		assert_eq!(reached.parent(), Some(id(1, 1)));
		assert_eq!(reached.g(), 2f32.sqrt() + 1.0);

		let kept = &grid[id(1, 0)];
		assert_eq!(kept.parent(), Some(id(0, 0)));
		assert_eq!(kept.g(), 1.0);
	}

	#[test]
	fn open_neighbor_kept_at_equal_cost() {
		init();
		let mut grid = grid(&["...."], (3, 0));

		grid[0].set_state(VisitState::Closed);
		grid.set_parent(1, 0);
		grid[1].set_state(VisitState::Open);
		// (2, 0) already has g = 2, the same as going through (1, 0)
		grid.set_parent(2, 0);
		grid[2].set_state(VisitState::Open);

		let mut pathfinder = Pathfinder::new(&mut grid);
		let frame = pathfinder.expand(1);

		assert_eq!(frame.candidates, Vec::<CellId>::new());
		assert_eq!(grid[2].parent(), Some(0));
		assert_eq!(grid[2].g(), 2.0);
		assert_eq!(grid[1].state(), VisitState::Closed);
	}

	#[test]
	fn closed_candidates_are_skipped() {
		init();
		let mut grid = grid(&["...."], (3, 0));
		grid[0].set_state(VisitState::Closed);
		grid.set_parent(1, 0);
		grid[1].set_state(VisitState::Closed);
		grid.set_parent(2, 1);
		grid[2].set_state(VisitState::Open);

		let pathfinder = Pathfinder::new(&mut grid);
		assert!(!pathfinder.can_expand(1, 1));
		assert!(pathfinder.can_expand(2, 1));
		assert!(pathfinder.can_expand(3, 1));

		let config = SearchConfig::with_max_depth(2);
		let pathfinder = Pathfinder::with_config(&mut grid, config);
		assert!(pathfinder.can_expand(2, 1));
		assert!(!pathfinder.can_expand(2, 2));
		assert!(!pathfinder.can_expand(1, 0));
	}

	#[test]
	fn every_cell_is_expanded_once() {
		init();
		let mut grid = grid(&["..#..", "..#..", "..#.."], (4, 2));
		let mut pathfinder = Pathfinder::new(&mut grid);

		assert_eq!(pathfinder.search((0, 0), (4, 2)).unwrap(), None);
		assert_eq!(pathfinder.expanded, vec![0, 6, 11, 10, 1, 5]);

		let rows = [".....", ".#.#.", ".....", "##.#.", "....."];
		let mut grid = self::grid(&rows, (4, 0));
		let mut pathfinder = Pathfinder::new(&mut grid);
		assert!(pathfinder.search((0, 4), (4, 0)).unwrap().is_some());

		let mut expanded = pathfinder.expanded.clone();
		expanded.sort_unstable();
		let before = expanded.len();
		expanded.dedup();
		assert_eq!(expanded.len(), before);
	}
}
