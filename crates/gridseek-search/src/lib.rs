//! Uninformed search over grid maps.
//!
//! This crate implements six uninformed strategies over any [`SearchSpace`]
//! (implemented for [`gridseek_core::Grid`]):
//!
//! - **Breadth-first** ([`Explorer::breadth_first`]): fewest edges
//! - **Depth-first** ([`Explorer::depth_first`]): no optimality guarantee
//! - **Uniform-cost** ([`Explorer::uniform_cost`]): lowest movement cost
//! - **Depth-limited** ([`Explorer::depth_limited`]): depth-first within a budget
//! - **Iterative deepening** ([`Explorer::iterative_deepening`]): fewest edges,
//!   depth-first memory use
//! - **Bidirectional** ([`Explorer::bidirectional`]): two breadth-first halves
//!   meeting in between
//!
//! Every run reports its progress to an [`Observer`], synchronously and in a
//! fixed order, so a visualizer or a test can replay exactly what the search
//! did. [`NoopObserver`] makes a run headless without changing its result.
//!
//! ```
//! use gridseek_core::Grid;
//! use gridseek_search::{Algorithm, Explorer, SearchView};
//!
//! let grid = Grid::parse("S.#\n..T").unwrap();
//! let mut explorer = Explorer::new(&grid, SearchView::new());
//! let path = explorer.run(Algorithm::BreadthFirst).unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(explorer.observer().render(&grid), "S*#\n--T");
//! ```

mod algorithm;
mod bfs;
mod bidirectional;
mod dfs;
mod dls;
mod explorer;
mod node;
mod observer;
mod path;
mod queue;
mod traits;
mod ucs;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use explorer::Explorer;
pub use node::{NodeArena, NodeId, SearchNode};
pub use observer::{
    EventLog, LogObserver, NoopObserver, Observer, Paced, SearchEvent, SearchView,
};
pub use path::{Predecessors, is_simple_path, path_cost};
pub use queue::PriorityQueue;
pub use traits::SearchSpace;
