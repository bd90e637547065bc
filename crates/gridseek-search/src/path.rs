//! Predecessor maps and path reconstruction.

use std::collections::HashMap;

use gridseek_core::Point;

use crate::traits::SearchSpace;

/// Maps each discovered cell to the cell that discovered it.
///
/// Roots map to `None`.
#[derive(Debug, Clone, Default)]
pub struct Predecessors {
    map: HashMap<Point, Option<Point>>,
}

impl Predecessors {
    /// A map containing a single root.
    pub fn with_root(root: Point) -> Self {
        let mut map = HashMap::new();
        map.insert(root, None);
        Self { map }
    }

    /// Record (or overwrite) the predecessor of `p`.
    #[inline]
    pub fn insert(&mut self, p: Point, from: Point) {
        self.map.insert(p, Some(from));
    }

    /// Whether `p` has been discovered.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.map.contains_key(&p)
    }

    /// The predecessor of `p`: `None` if undiscovered, `Some(None)` for a
    /// root.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Option<Point>> {
        self.map.get(&p).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Walk from `from` towards its root, yielding `from` first.
    ///
    /// # Panics
    ///
    /// Panics if the chain reaches an undiscovered cell.
    pub fn chain(&self, from: Point) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(Some(from), move |&p| match self.map.get(&p) {
            Some(prev) => *prev,
            None => panic!("predecessor chain broken at {p}"),
        })
    }

    /// Rebuild the path from `start` to `target`, both inclusive.
    ///
    /// # Panics
    ///
    /// Only call this once `target` is known to be discovered; an
    /// undiscovered target or a chain that never reaches `start` is an
    /// internal invariant violation and panics.
    pub fn reconstruct(&self, target: Point, start: Point) -> Vec<Point> {
        let mut path = vec![target];
        let mut cur = target;
        while cur != start {
            cur = match self.map.get(&cur) {
                Some(Some(prev)) => *prev,
                _ => panic!("no predecessor for {cur} while reconstructing {start} -> {target}"),
            };
            path.push(cur);
        }
        path.reverse();
        path
    }
}

/// Total movement cost along `path`.
pub fn path_cost<S: SearchSpace + ?Sized>(space: &S, path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| space.movement_cost(w[0], w[1]))
        .sum()
}

/// Whether `path` runs from start to target over valid, adjacent,
/// non-repeating cells.
pub fn is_simple_path<S: SearchSpace + ?Sized>(space: &S, path: &[Point]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    if first != space.start() || last != space.target() {
        return false;
    }
    if !path.iter().all(|&p| space.is_valid(p)) {
        return false;
    }
    let mut seen = std::collections::HashSet::with_capacity(path.len());
    if !path.iter().all(|&p| seen.insert(p)) {
        return false;
    }
    let mut nbuf = Vec::with_capacity(8);
    path.windows(2).all(|w| {
        nbuf.clear();
        space.neighbors(w[0], &mut nbuf);
        nbuf.contains(&w[1])
    })
}
