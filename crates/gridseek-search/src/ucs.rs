use std::collections::{HashMap, HashSet};

use gridseek_core::Point;

use crate::explorer::Explorer;
use crate::node::NodeArena;
use crate::observer::Observer;
use crate::queue::PriorityQueue;
use crate::traits::SearchSpace;

impl<S: SearchSpace + ?Sized, O: Observer> Explorer<'_, S, O> {
    /// Uniform-cost search.
    ///
    /// Pops the cheapest queued node; equal costs come out in insertion
    /// order. An improved cost re-queues the neighbor and leaves the old
    /// entry behind, to be skipped once its cell is finalized. The returned
    /// path has minimum total movement cost.
    pub fn uniform_cost(&mut self) -> Option<Vec<Point>> {
        const NAME: &str = "UCS";
        self.begin(NAME);
        let start = self.space.start();
        let target = self.space.target();

        let mut arena = NodeArena::new();
        let mut open = PriorityQueue::new();
        open.put(arena.root(start), 0.0);
        let mut finalized = HashSet::new();
        let mut best: HashMap<Point, f64> = HashMap::from([(start, 0.0)]);
        self.observer.on_frontier_add(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let path = loop {
            let Some((id, cur_cost)) = open.get_with_priority() else {
                break None;
            };
            let cur = arena[id].pos;
            // Stale entry.
            if !finalized.insert(cur) {
                continue;
            }
            self.visit(cur);

            if cur == target {
                break Some(arena.path_to(id));
            }

            nbuf.clear();
            self.space.neighbors(cur, &mut nbuf);
            for &n in nbuf.iter() {
                if !self.space.is_valid(n) {
                    continue;
                }
                let tentative = cur_cost + self.space.movement_cost(cur, n);
                if best.get(&n).is_some_and(|&c| tentative >= c) {
                    continue;
                }
                best.insert(n, tentative);
                open.put(arena.child(id, n, tentative), tentative);
                self.observer.on_frontier_add(n);
            }
        };

        self.nbuf = nbuf;
        log::trace!(
            "{NAME}: {} nodes created, {} entries left queued",
            arena.len(),
            open.len()
        );
        self.finish(NAME, path)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;

    use crate::observer::{EventLog, SearchEvent};
    use crate::path::{is_simple_path, path_cost};
    use crate::{Explorer, SearchSpace};
    use gridseek_core::{Bounds, Grid, Point};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn open_grid_cost_is_four_diagonals() {
        let g = Grid::open(5, 5, p(0, 0), p(4, 4)).unwrap();
        let path = Explorer::headless(&g).uniform_cost().unwrap();
        assert!((path_cost(&g, &path) - 4.0 * SQRT_2).abs() < 1e-9);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn prefers_cheaper_path_over_fewer_edges() {
        // Straight down the column costs 2.0; one diagonal plus one
        // orthogonal would cost 2.414.
        let g = Grid::open(3, 2, p(0, 0), p(2, 0)).unwrap();
        let path = Explorer::headless(&g).uniform_cost().unwrap();
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0)]);
    }

    /// Three cells where the direct hop costs 10 and the detour costs 2.
    struct Triangle;

    impl SearchSpace for Triangle {
        fn start(&self) -> Point {
            p(0, 0)
        }
        fn target(&self) -> Point {
            p(0, 2)
        }
        fn bounds(&self) -> Bounds {
            Bounds::new(1, 3)
        }
        fn is_valid(&self, q: Point) -> bool {
            self.bounds().contains(q)
        }
        fn neighbors(&self, q: Point, buf: &mut Vec<Point>) {
            buf.extend((0..3).rev().map(|c| p(0, c)).filter(|&n| n != q));
        }
        fn movement_cost(&self, from: Point, to: Point) -> f64 {
            if (from.col - to.col).abs() == 2 { 10.0 } else { 1.0 }
        }
    }

    #[test]
    fn relaxation_replaces_costlier_route() {
        let mut ex = Explorer::new(&Triangle, EventLog::new());
        let path = ex.uniform_cost().unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(path_cost(&Triangle, &path), 2.0);
        // Queued at 10 first, then again at 2 after relaxation.
        let adds = ex
            .observer()
            .events
            .iter()
            .filter(|e| **e == SearchEvent::FrontierAdd(p(0, 2)))
            .count();
        assert_eq!(adds, 2);
        assert_eq!(ex.observer().visits(), vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn path_follows_cheapest_node_chain() {
        let g = Grid::parse(
            "S..#.
             .#...
             ...#T",
        )
        .unwrap();
        let path = Explorer::headless(&g).uniform_cost().unwrap();
        assert!(is_simple_path(&g, &path));
        assert!((path_cost(&g, &path) - (2.0 + 2.0 * SQRT_2)).abs() < 1e-9);
    }

    #[test]
    fn no_worse_than_bfs() {
        let g = Grid::parse(
            "S...
             .##.
             ...T",
        )
        .unwrap();
        let ucs = Explorer::headless(&g).uniform_cost().unwrap();
        let bfs = Explorer::headless(&g).breadth_first().unwrap();
        assert!(path_cost(&g, &ucs) <= path_cost(&g, &bfs) + 1e-9);
    }

    #[test]
    fn skips_stale_entries() {
        let g = Grid::open(4, 4, p(0, 0), p(3, 3)).unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        ex.uniform_cost().unwrap();
        let visits = ex.observer().visits();
        let mut unique = visits.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), visits.len());
    }

    #[test]
    fn unreachable_target() {
        let g = Grid::parse(
            "S#.
             ##T",
        )
        .unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        assert_eq!(ex.uniform_cost(), None);
        assert_eq!(ex.observer().visits(), vec![p(0, 0)]);
        assert_eq!(ex.observer().paths_found(), 0);
    }
}
