//! Observation of a running search.
//!
//! Algorithms report every state change to an [`Observer`] synchronously and
//! in a fixed order. Observers never influence the search: the returned path
//! is the same whatever observer is attached.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::thread;
use std::time::Duration;

use gridseek_core::{Grid, Point, Tile};

/// Receiver of search events. All methods default to no-ops.
pub trait Observer {
    /// A new run (or a new iterative-deepening round) is starting.
    fn on_reset(&mut self) {}

    /// `p` is being expanded; it becomes the current cell and is explored.
    fn on_visit(&mut self, _p: Point) {}

    /// `p` joined the frontier.
    fn on_frontier_add(&mut self, _p: Point) {}

    /// `p` left the frontier.
    fn on_frontier_remove(&mut self, _p: Point) {}

    /// The search succeeded with `path`. Called at most once per run.
    fn on_path_found(&mut self, _path: &[Point]) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_reset(&mut self) {
        (**self).on_reset()
    }
    fn on_visit(&mut self, p: Point) {
        (**self).on_visit(p)
    }
    fn on_frontier_add(&mut self, p: Point) {
        (**self).on_frontier_add(p)
    }
    fn on_frontier_remove(&mut self, p: Point) {
        (**self).on_frontier_remove(p)
    }
    fn on_path_found(&mut self, path: &[Point]) {
        (**self).on_path_found(path)
    }
}

/// Fan out every event to both observers, left first.
impl<A: Observer, B: Observer> Observer for (A, B) {
    fn on_reset(&mut self) {
        self.0.on_reset();
        self.1.on_reset();
    }
    fn on_visit(&mut self, p: Point) {
        self.0.on_visit(p);
        self.1.on_visit(p);
    }
    fn on_frontier_add(&mut self, p: Point) {
        self.0.on_frontier_add(p);
        self.1.on_frontier_add(p);
    }
    fn on_frontier_remove(&mut self, p: Point) {
        self.0.on_frontier_remove(p);
        self.1.on_frontier_remove(p);
    }
    fn on_path_found(&mut self, path: &[Point]) {
        self.0.on_path_found(path);
        self.1.on_path_found(path);
    }
}

/// Discards everything. Use for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

// ---------------------------------------------------------------------------
// EventLog
// ---------------------------------------------------------------------------

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Reset,
    Visit(Point),
    FrontierAdd(Point),
    FrontierRemove(Point),
    PathFound(Vec<Point>),
}

/// Records the full event stream, in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<SearchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited cells in visiting order.
    pub fn visits(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Visit(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Number of `PathFound` events.
    pub fn paths_found(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SearchEvent::PathFound(_)))
            .count()
    }

    /// Number of `Reset` events.
    pub fn resets(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Reset))
            .count()
    }
}

impl Observer for EventLog {
    fn on_reset(&mut self) {
        self.events.push(SearchEvent::Reset);
    }
    fn on_visit(&mut self, p: Point) {
        self.events.push(SearchEvent::Visit(p));
    }
    fn on_frontier_add(&mut self, p: Point) {
        self.events.push(SearchEvent::FrontierAdd(p));
    }
    fn on_frontier_remove(&mut self, p: Point) {
        self.events.push(SearchEvent::FrontierRemove(p));
    }
    fn on_path_found(&mut self, path: &[Point]) {
        self.events.push(SearchEvent::PathFound(path.to_vec()));
    }
}

// ---------------------------------------------------------------------------
// SearchView
// ---------------------------------------------------------------------------

/// Snapshot of the observation state a visualizer draws: the current cell,
/// the frontier, the explored set and the final path.
///
/// Cleared on every reset; after a run it holds the terminal snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    pub current: Option<Point>,
    pub frontier: BTreeSet<Point>,
    pub explored: BTreeSet<Point>,
    pub final_path: Vec<Point>,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character drawn for `p`, by decreasing precedence: wall, start,
    /// target, final path, current, frontier, explored.
    pub fn glyph(&self, grid: &Grid, p: Point) -> char {
        match grid.tile(p) {
            None => ' ',
            Some(t @ (Tile::Wall | Tile::Start | Tile::Target)) => t.to_char(),
            Some(Tile::Empty) => {
                if self.final_path.contains(&p) {
                    '*'
                } else if self.current == Some(p) {
                    '@'
                } else if self.frontier.contains(&p) {
                    '+'
                } else if self.explored.contains(&p) {
                    '-'
                } else {
                    '.'
                }
            }
        }
    }

    /// Text frame of `grid` overlaid with this snapshot, one line per row.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.bounds().len() + grid.rows() as usize);
        for row in 0..grid.rows() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..grid.cols() {
                let _ = write!(out, "{}", self.glyph(grid, Point::new(row, col)));
            }
        }
        out
    }
}

impl Observer for SearchView {
    fn on_reset(&mut self) {
        self.current = None;
        self.frontier.clear();
        self.explored.clear();
        self.final_path.clear();
    }
    fn on_visit(&mut self, p: Point) {
        self.current = Some(p);
        self.explored.insert(p);
    }
    fn on_frontier_add(&mut self, p: Point) {
        self.frontier.insert(p);
    }
    fn on_frontier_remove(&mut self, p: Point) {
        self.frontier.remove(&p);
    }
    fn on_path_found(&mut self, path: &[Point]) {
        self.final_path = path.to_vec();
        self.current = None;
    }
}

// ---------------------------------------------------------------------------
// LogObserver / Paced
// ---------------------------------------------------------------------------

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    label: String,
    visits: usize,
}

impl LogObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visits: 0,
        }
    }

    /// Visits seen since the last reset.
    pub fn visits(&self) -> usize {
        self.visits
    }
}

impl Observer for LogObserver {
    fn on_reset(&mut self) {
        self.visits = 0;
        log::trace!("{}: reset", self.label);
    }
    fn on_visit(&mut self, p: Point) {
        self.visits += 1;
        log::trace!("{}: visit #{} {p}", self.label, self.visits);
    }
    fn on_frontier_add(&mut self, p: Point) {
        log::trace!("{}: frontier + {p}", self.label);
    }
    fn on_frontier_remove(&mut self, p: Point) {
        log::trace!("{}: frontier - {p}", self.label);
    }
    fn on_path_found(&mut self, path: &[Point]) {
        log::trace!(
            "{}: path of {} cells after {} visits",
            self.label,
            path.len(),
            self.visits
        );
    }
}

/// Sleeps for `delay` after each visit and after a found path, so a live
/// display can keep up. A zero delay never sleeps.
#[derive(Debug, Clone, Default)]
pub struct Paced<O> {
    pub inner: O,
    pub delay: Duration,
}

impl<O: Observer> Paced<O> {
    pub fn new(inner: O, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<O: Observer> Observer for Paced<O> {
    fn on_reset(&mut self) {
        self.inner.on_reset();
    }
    fn on_visit(&mut self, p: Point) {
        self.inner.on_visit(p);
        self.pause();
    }
    fn on_frontier_add(&mut self, p: Point) {
        self.inner.on_frontier_add(p);
    }
    fn on_frontier_remove(&mut self, p: Point) {
        self.inner.on_frontier_remove(p);
    }
    fn on_path_found(&mut self, path: &[Point]) {
        self.inner.on_path_found(path);
        self.pause();
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_round_trip() {
        let ev = SearchEvent::PathFound(vec![Point::new(0, 0), Point::new(1, 1)]);
        let json = serde_json::to_string(&ev).unwrap();
        let back: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
