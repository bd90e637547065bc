use std::collections::{HashSet, VecDeque};

use gridseek_core::Point;

use crate::explorer::Explorer;
use crate::node::NodeArena;
use crate::observer::Observer;
use crate::traits::SearchSpace;

impl<S: SearchSpace + ?Sized, O: Observer> Explorer<'_, S, O> {
    /// Breadth-first search.
    ///
    /// Cells are marked visited when discovered, so each is queued once. The
    /// returned path has the fewest edges of any path, regardless of step
    /// costs.
    pub fn breadth_first(&mut self) -> Option<Vec<Point>> {
        const NAME: &str = "BFS";
        self.begin(NAME);
        let start = self.space.start();
        let target = self.space.target();

        let mut arena = NodeArena::new();
        let mut queue = VecDeque::new();
        queue.push_back(arena.root(start));
        let mut visited = HashSet::from([start]);
        self.observer.on_frontier_add(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let path = loop {
            let Some(id) = queue.pop_front() else {
                break None;
            };
            let cur = arena[id].pos;
            self.visit(cur);

            if cur == target {
                break Some(arena.path_to(id));
            }

            nbuf.clear();
            self.space.neighbors(cur, &mut nbuf);
            for &n in nbuf.iter() {
                if visited.contains(&n) || !self.space.is_valid(n) {
                    continue;
                }
                visited.insert(n);
                let cost = arena[id].cost + self.space.movement_cost(cur, n);
                queue.push_back(arena.child(id, n, cost));
                self.observer.on_frontier_add(n);
            }
        };

        self.nbuf = nbuf;
        self.finish(NAME, path)
    }
}

#[cfg(test)]
mod tests {
    use crate::observer::{EventLog, SearchEvent};
    use crate::{Explorer, SearchView};
    use gridseek_core::{Grid, Point};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn open_grid_takes_diagonal() {
        let g = Grid::open(5, 5, p(0, 0), p(4, 4)).unwrap();
        let path = Explorer::headless(&g).breadth_first().unwrap();
        assert_eq!(path, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3), p(4, 4)]);
    }

    #[test]
    fn event_order_on_small_grid() {
        let g = Grid::parse("ST").unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        let path = ex.breadth_first().unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, 1)]);
        assert_eq!(
            ex.observer().events,
            vec![
                SearchEvent::Reset,
                SearchEvent::FrontierAdd(p(0, 0)),
                SearchEvent::Visit(p(0, 0)),
                SearchEvent::FrontierRemove(p(0, 0)),
                SearchEvent::FrontierAdd(p(0, 1)),
                SearchEvent::Visit(p(0, 1)),
                SearchEvent::FrontierRemove(p(0, 1)),
                SearchEvent::PathFound(vec![p(0, 0), p(0, 1)]),
            ]
        );
    }

    #[test]
    fn visits_in_increasing_depth_order() {
        let g = Grid::open(3, 3, p(1, 1), p(2, 0)).unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        ex.breadth_first().unwrap();
        // Root, then its neighbors in direction order: N, E, S, SE, W, NW.
        // The target sits down-left of the root, which is two steps away.
        assert_eq!(
            ex.observer().visits(),
            vec![
                p(1, 1),
                p(0, 1),
                p(1, 2),
                p(2, 1),
                p(2, 2),
                p(1, 0),
                p(0, 0),
                p(0, 2),
                p(2, 0),
            ]
        );
    }

    #[test]
    fn routes_around_walls() {
        let g = Grid::parse(
            "S#.
             .#.
             ..T",
        )
        .unwrap();
        let mut ex = Explorer::new(&g, SearchView::new());
        let path = ex.breadth_first().unwrap();
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 1), p(2, 2)]);
        assert_eq!(ex.observer().final_path, path);
        assert_eq!(ex.observer().current, None);
    }

    #[test]
    fn walled_off_target_fails() {
        let g = Grid::parse(
            "S.#.
             ..#T",
        )
        .unwrap();
        let mut ex = Explorer::new(&g, EventLog::new());
        assert_eq!(ex.breadth_first(), None);
        assert_eq!(ex.observer().paths_found(), 0);
        assert_eq!(ex.observer().visits().len(), 4);
    }
}
