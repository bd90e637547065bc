use gridseek_core::Point;

use crate::algorithm::Algorithm;
use crate::observer::{NoopObserver, Observer};
use crate::path::path_cost;
use crate::traits::SearchSpace;

/// Runs searches over a [`SearchSpace`], reporting to an [`Observer`].
///
/// Each search owns its queues, visited sets and predecessor maps for the
/// duration of the call; the explorer only keeps a scratch neighbor buffer
/// and the observer between runs. The space is borrowed immutably, so any
/// number of explorers may share it.
pub struct Explorer<'a, S: SearchSpace + ?Sized, O: Observer = NoopObserver> {
    pub(crate) space: &'a S,
    pub(crate) observer: O,
    pub(crate) nbuf: Vec<Point>,
    visits: usize,
}

impl<'a, S: SearchSpace + ?Sized> Explorer<'a, S> {
    /// An explorer that reports to nobody.
    pub fn headless(space: &'a S) -> Self {
        Self::new(space, NoopObserver)
    }
}

impl<'a, S: SearchSpace + ?Sized, O: Observer> Explorer<'a, S, O> {
    pub fn new(space: &'a S, observer: O) -> Self {
        Self {
            space,
            observer,
            nbuf: Vec::with_capacity(8),
            visits: 0,
        }
    }

    /// The searched space.
    #[inline]
    pub fn space(&self) -> &'a S {
        self.space
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Cells visited by the last run, counting repeats across
    /// iterative-deepening rounds.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Run `algorithm` and return the path from start to target, both
    /// inclusive, or `None` if the target was not reached.
    pub fn run(&mut self, algorithm: Algorithm) -> Option<Vec<Point>> {
        match algorithm {
            Algorithm::BreadthFirst => self.breadth_first(),
            Algorithm::DepthFirst => self.depth_first(),
            Algorithm::UniformCost => self.uniform_cost(),
            Algorithm::DepthLimited { limit } => self.depth_limited(limit),
            Algorithm::IterativeDeepening { max_depth } => self.iterative_deepening(max_depth),
            Algorithm::Bidirectional => self.bidirectional(),
        }
    }

    // -----------------------------------------------------------------------
    // Shared run bookkeeping
    // -----------------------------------------------------------------------

    pub(crate) fn begin(&mut self, name: &str) {
        self.visits = 0;
        self.observer.on_reset();
        log::debug!(
            "{name}: {} -> {} on {}",
            self.space.start(),
            self.space.target(),
            self.space.bounds()
        );
    }

    /// Report `p` as the current, explored cell. Always precedes the goal
    /// check for `p`.
    #[inline]
    pub(crate) fn visit(&mut self, p: Point) {
        self.visits += 1;
        self.observer.on_visit(p);
        self.observer.on_frontier_remove(p);
    }

    pub(crate) fn finish(&mut self, name: &str, path: Option<Vec<Point>>) -> Option<Vec<Point>> {
        match &path {
            Some(path) => {
                self.observer.on_path_found(path);
                log::debug!(
                    "{name}: path found, {} steps, cost {:.3}, {} visits",
                    path.len().saturating_sub(1),
                    path_cost(self.space, path),
                    self.visits
                );
            }
            None => log::debug!("{name}: no path after {} visits", self.visits),
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::EventLog;
    use gridseek_core::Grid;

    #[test]
    fn run_dispatches_and_reports_once() {
        let g = Grid::open(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        let path = ex.run(Algorithm::BreadthFirst).unwrap();
        assert_eq!(path.first(), Some(&g.start()));
        assert_eq!(path.last(), Some(&g.target()));
        assert_eq!(ex.observer().paths_found(), 1);
        assert_eq!(ex.visits(), ex.observer().visits().len());
    }

    #[test]
    fn headless_matches_observed() {
        let g = Grid::parse(
            "S..#....
             .#.#.##.
             .#...#.T",
        )
        .unwrap();
        for alg in Algorithm::all(3, 10) {
            let quiet = Explorer::headless(&g).run(alg);
            let loud = Explorer::new(&g, EventLog::new()).run(alg);
            assert_eq!(quiet, loud, "{alg}");
        }
    }
}
