//! Parent-linked search nodes stored in a per-run arena.

use gridseek_core::Point;

/// Handle of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A discovered cell together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub pos: Point,
    pub parent: Option<NodeId>,
    /// Accumulated movement cost from the root.
    pub cost: f64,
    /// Number of edges from the root.
    pub depth: u32,
}

/// Append-only node storage. Parents always precede their children, so the
/// links can never form a cycle.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tree root at cost 0 and depth 0.
    pub fn root(&mut self, pos: Point) -> NodeId {
        self.push(SearchNode {
            pos,
            parent: None,
            cost: 0.0,
            depth: 0,
        })
    }

    /// Add a node discovered from `parent` at the given accumulated cost.
    pub fn child(&mut self, parent: NodeId, pos: Point, cost: f64) -> NodeId {
        let depth = self[parent].depth + 1;
        self.push(SearchNode {
            pos,
            parent: Some(parent),
            cost,
            depth,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Positions from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::with_capacity(self[id].depth as usize + 1);
        let mut cur = Some(id);
        while let Some(n) = cur {
            path.push(self[n].pos);
            cur = self[n].parent;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_and_cost_follow_parent() {
        let mut arena = NodeArena::new();
        let root = arena.root(Point::new(0, 0));
        let a = arena.child(root, Point::new(1, 1), 1.5);
        let b = arena.child(a, Point::new(1, 2), 2.5);
        assert_eq!(arena[root].depth, 0);
        assert_eq!(arena[a].depth, 1);
        assert_eq!(arena[b].depth, 2);
        assert_eq!(arena[b].parent, Some(a));
        assert_eq!(arena[b].cost, 2.5);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn path_to_walks_back_to_root() {
        let mut arena = NodeArena::new();
        let root = arena.root(Point::new(0, 0));
        let a = arena.child(root, Point::new(0, 1), 1.0);
        let _sibling = arena.child(root, Point::new(1, 0), 1.0);
        let b = arena.child(a, Point::new(0, 2), 2.0);
        assert_eq!(
            arena.path_to(b),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(arena.path_to(root), vec![Point::new(0, 0)]);
    }
}
