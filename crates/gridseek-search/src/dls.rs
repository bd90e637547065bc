//! Depth-limited and iterative-deepening search.
//!
//! The depth-first walk runs on an explicit stack of frames instead of
//! recursion, so the depth limit is bounded by memory rather than by the
//! thread's stack.

use std::collections::HashSet;

use gridseek_core::Point;

use crate::explorer::Explorer;
use crate::observer::Observer;
use crate::path::Predecessors;
use crate::traits::SearchSpace;

/// One cell on the current depth-first branch.
struct Frame {
    pos: Point,
    remaining: u32,
    neighbors: Vec<Point>,
    next: usize,
}

enum Entered {
    Goal,
    Leaf,
    Expand(Frame),
}

impl<S: SearchSpace + ?Sized, O: Observer> Explorer<'_, S, O> {
    /// Depth-limited search: depth-first, never more than `limit` edges from
    /// the start.
    ///
    /// A cell is visited only while it is on the current branch. When its
    /// branch is exhausted it is released again, so a sibling branch that
    /// reaches it with a different remaining budget can explore it anew.
    pub fn depth_limited(&mut self, limit: u32) -> Option<Vec<Point>> {
        const NAME: &str = "DLS";
        self.begin(NAME);
        let path = self.depth_limited_round(limit);
        self.finish(NAME, path)
    }

    /// Iterative deepening: depth-limited search with limits `0..=max_depth`,
    /// starting over (observer reset included) for each limit.
    ///
    /// The first path found has the fewest edges of any path.
    pub fn iterative_deepening(&mut self, max_depth: u32) -> Option<Vec<Point>> {
        const NAME: &str = "IDDFS";
        self.begin(NAME);
        for depth in 0..=max_depth {
            if depth > 0 {
                self.observer.on_reset();
            }
            log::trace!("{NAME}: depth {depth}");
            if let Some(path) = self.depth_limited_round(depth) {
                return self.finish(NAME, Some(path));
            }
        }
        self.finish(NAME, None)
    }

    fn depth_limited_round(&mut self, limit: u32) -> Option<Vec<Point>> {
        let start = self.space.start();
        let target = self.space.target();
        let mut preds = Predecessors::with_root(start);
        let mut on_branch = HashSet::new();
        let mut stack = Vec::new();

        match self.enter(start, limit, &mut on_branch) {
            Entered::Goal => return Some(preds.reconstruct(target, start)),
            Entered::Leaf => return None,
            Entered::Expand(frame) => stack.push(frame),
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&n) = frame.neighbors.get(frame.next) else {
                // Branch exhausted: release the cell for sibling branches.
                on_branch.remove(&frame.pos);
                stack.pop();
                continue;
            };
            frame.next += 1;
            if on_branch.contains(&n) || !self.space.is_valid(n) {
                continue;
            }
            let (parent, remaining) = (frame.pos, frame.remaining - 1);
            preds.insert(n, parent);
            match self.enter(n, remaining, &mut on_branch) {
                Entered::Goal => return Some(preds.reconstruct(target, start)),
                Entered::Leaf => {}
                Entered::Expand(child) => stack.push(child),
            }
        }
        None
    }

    /// Visit `pos`; the goal check comes before the budget check.
    fn enter(&mut self, pos: Point, remaining: u32, on_branch: &mut HashSet<Point>) -> Entered {
        self.visit(pos);
        if pos == self.space.target() {
            return Entered::Goal;
        }
        if remaining == 0 {
            return Entered::Leaf;
        }
        on_branch.insert(pos);
        let mut neighbors = Vec::with_capacity(8);
        self.space.neighbors(pos, &mut neighbors);
        for &n in &neighbors {
            if !on_branch.contains(&n) && self.space.is_valid(n) {
                self.observer.on_frontier_add(n);
            }
        }
        Entered::Expand(Frame {
            pos,
            remaining,
            neighbors,
            next: 0,
        })
    }
}
