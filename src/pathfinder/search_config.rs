/// Options for configuring the [`Pathfinder`](crate::Pathfinder)
///
/// Default options:
/// ```
/// # use grid_pathfinder::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_depth: None,
/// 		corner_cutting: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The maximum number of Cells the search may descend into before it has to backtrack
	/// (defaults to `None`, meaning no limit).
	///
	/// A neighbor that would exceed the limit is still recognized as the goal, but it is not
	/// expanded any further. This means that with a limit, the search may fail to find Paths
	/// that exist further away.
	///
	/// The search never uses the call stack for its depth, so this option only bounds the memory
	/// used by the search itself.
	pub max_depth: Option<usize>,
	/// `true` (default): diagonal steps are allowed even if one or both of the orthogonal Cells
	/// they pass are blocked.
	///
	/// `false`: a diagonal step is only taken if both orthogonally adjacent Cells are walkable.
	///
	/// ```no_code
	/// . #      true: A -> B is a valid step
	/// A .     false: A -> B is not
	///   B
	/// ```
	pub corner_cutting: bool,
}

impl SearchConfig {
	/// The default options: no depth limit, diagonal steps past blocked corners allowed
	///
	/// Values:
	/// ```
	/// # use grid_pathfinder::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_depth: None,
	/// 		corner_cutting: true,
	/// 	},
	/// 	SearchConfig::REFERENCE
	/// );
	/// ```
	pub const REFERENCE: SearchConfig = SearchConfig {
		max_depth: None,
		corner_cutting: true,
	};
	/// options for Agents that cannot squeeze past the corners of blocked Cells
	///
	/// Values:
	/// ```
	/// # use grid_pathfinder::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_depth: None,
	/// 		corner_cutting: false,
	/// 	},
	/// 	SearchConfig::STRICT
	/// );
	/// ```
	pub const STRICT: SearchConfig = SearchConfig {
		max_depth: None,
		corner_cutting: false,
	};

	/// Creates the default config with the given depth limit.
	///
	/// ```
	/// # use grid_pathfinder::SearchConfig;
	/// let config = SearchConfig::with_max_depth(64);
	/// assert_eq!(config.max_depth, Some(64));
	/// assert!(config.corner_cutting);
	/// ```
	pub fn with_max_depth(max_depth: usize) -> SearchConfig {
		SearchConfig {
			max_depth: Some(max_depth),
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::REFERENCE
	}
}
