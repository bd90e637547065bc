use std::collections::HashSet;

use gridseek_core::Point;

use crate::explorer::Explorer;
use crate::node::NodeArena;
use crate::observer::Observer;
use crate::traits::SearchSpace;

impl<S: SearchSpace + ?Sized, O: Observer> Explorer<'_, S, O> {
    /// Depth-first search with an explicit stack.
    ///
    /// Cells are marked visited when popped, so a cell may sit on the stack
    /// several times; duplicates are discarded when they surface. Neighbors
    /// are pushed in reverse order so the first one is expanded first. No
    /// shortest-path guarantee.
    pub fn depth_first(&mut self) -> Option<Vec<Point>> {
        const NAME: &str = "DFS";
        self.begin(NAME);
        let start = self.space.start();
        let target = self.space.target();

        let mut arena = NodeArena::new();
        let mut stack = vec![arena.root(start)];
        let mut visited = HashSet::new();
        self.observer.on_frontier_add(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let path = loop {
            let Some(id) = stack.pop() else {
                break None;
            };
            let cur = arena[id].pos;
            if !visited.insert(cur) {
                continue;
            }
            self.visit(cur);

            if cur == target {
                break Some(arena.path_to(id));
            }

            nbuf.clear();
            self.space.neighbors(cur, &mut nbuf);
            for &n in nbuf.iter().rev() {
                if visited.contains(&n) || !self.space.is_valid(n) {
                    continue;
                }
                let cost = arena[id].cost + self.space.movement_cost(cur, n);
                stack.push(arena.child(id, n, cost));
                self.observer.on_frontier_add(n);
            }
        };

        self.nbuf = nbuf;
        self.finish(NAME, path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::observer::EventLog;
    use crate::path::is_simple_path;
    use crate::Explorer;
    use gridseek_core::{Grid, Point};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn expands_first_neighbor_first() {
        let g = Grid::open(3, 3, p(0, 0), p(2, 2)).unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        let path = ex.depth_first().unwrap();
        assert_eq!(ex.observer().visits(), vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn never_revisits_a_cell() {
        let g = Grid::parse(
            "S....#..
             .##..#..
             ....##.#
             .#......
             .#.##..#
             ...#...T",
        )
        .unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        let path = ex.depth_first().unwrap();
        assert!(is_simple_path(&g, &path));
        let visits = ex.observer().visits();
        let unique: HashSet<_> = visits.iter().collect();
        assert_eq!(unique.len(), visits.len());
    }

    #[test]
    fn exhausts_component_when_unreachable() {
        let g = Grid::parse(
            "S.#.
             ..#T",
        )
        .unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        assert_eq!(ex.depth_first(), None);
        assert_eq!(ex.observer().paths_found(), 0);
        assert_eq!(ex.observer().visits().len(), 4);
    }
}
