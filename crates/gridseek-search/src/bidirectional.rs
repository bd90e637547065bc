use std::collections::VecDeque;

use gridseek_core::Point;

use crate::explorer::Explorer;
use crate::observer::Observer;
use crate::path::Predecessors;
use crate::traits::SearchSpace;

impl<S: SearchSpace + ?Sized, O: Observer> Explorer<'_, S, O> {
    /// Bidirectional breadth-first search.
    ///
    /// One search grows from the start and one from the target, alternating
    /// single expansions (forward first). The run ends as soon as either
    /// side dequeues a cell the other side has already discovered, and the
    /// two half-paths are joined there.
    ///
    /// Relies on symmetric adjacency: the backward half is walked in the
    /// opposite direction to how it was discovered.
    pub fn bidirectional(&mut self) -> Option<Vec<Point>> {
        const NAME: &str = "Bidirectional";
        self.begin(NAME);
        let start = self.space.start();
        let target = self.space.target();

        let mut fwd_queue = VecDeque::from([start]);
        let mut bwd_queue = VecDeque::from([target]);
        let mut fwd = Predecessors::with_root(start);
        let mut bwd = Predecessors::with_root(target);
        self.observer.on_frontier_add(start);
        self.observer.on_frontier_add(target);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let meeting = loop {
            if fwd_queue.is_empty() || bwd_queue.is_empty() {
                break None;
            }
            if let Some(m) = self.expand_side(&mut fwd_queue, &mut fwd, &bwd, &mut nbuf) {
                break Some(m);
            }
            if let Some(m) = self.expand_side(&mut bwd_queue, &mut bwd, &fwd, &mut nbuf) {
                break Some(m);
            }
        };

        self.nbuf = nbuf;
        let path = meeting.map(|m| {
            log::trace!("{NAME}: frontiers met at {m}");
            join(&fwd, &bwd, m)
        });
        self.finish(NAME, path)
    }

    /// Dequeue and expand one cell of one side. Returns the cell if the other
    /// side already knows it.
    fn expand_side(
        &mut self,
        queue: &mut VecDeque<Point>,
        own: &mut Predecessors,
        other: &Predecessors,
        nbuf: &mut Vec<Point>,
    ) -> Option<Point> {
        let cur = queue.pop_front()?;
        self.visit(cur);
        if other.contains(cur) {
            return Some(cur);
        }
        nbuf.clear();
        self.space.neighbors(cur, nbuf);
        for &n in nbuf.iter() {
            if own.contains(n) || !self.space.is_valid(n) {
                continue;
            }
            own.insert(n, cur);
            queue.push_back(n);
            self.observer.on_frontier_add(n);
        }
        None
    }
}

/// Forward chain from the start to `meeting`, then the backward chain from
/// the cell after `meeting` to the target.
fn join(fwd: &Predecessors, bwd: &Predecessors, meeting: Point) -> Vec<Point> {
    let mut path: Vec<Point> = fwd.chain(meeting).collect();
    path.reverse();
    if let Some(Some(next)) = bwd.get(meeting) {
        path.extend(bwd.chain(next));
    }
    path
}
