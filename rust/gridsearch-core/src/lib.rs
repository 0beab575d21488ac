pub mod errors;
pub mod frontier;
pub mod grid;
pub mod layout;
pub mod node;
pub mod options;
pub mod problem;
pub mod report;
pub mod search;

pub use errors::{LayoutError, SearchError};
pub use grid::{Bounds, Cell, GridProblem};
pub use layout::Layout;
pub use node::{Node, NodeId, SearchTree};
pub use options::SearchOptions;
pub use problem::Problem;
pub use report::{CountCalls, Report};
pub use search::{
    astar_search, breadth_first_search, depth_first_search, greedy_best_first_search, hill_climbing, Algorithm,
    Failure, Outcome, Search, SearchStats, Searcher,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
