//! Forward-traversable routes built from a terminal node's ancestry.

use std::fmt;

use crate::state::Position;

use super::node::{NodeArena, NodeId, SearchNode};

/// Route from the start to the destination.
///
/// The path keeps the arena of the run that produced it. Nodes on the route
/// carry child links pointing toward the destination; every other node of the
/// run is retained but unlinked.
#[derive(Clone, Debug)]
pub struct Path {
    arena: NodeArena,
    origin: NodeId,
    terminal: NodeId,
    len: usize,
}

impl Path {
    /// Links `terminal`'s ancestry into a forward chain.
    ///
    /// Walks parent links back to the start and sets each node's child to the
    /// node visited just before it, so following children from the start
    /// leads to `terminal`.
    pub fn reconstruct(mut arena: NodeArena, terminal: NodeId) -> Self {
        let mut child = None;
        let mut cursor = Some(terminal);
        let mut origin = terminal;
        let mut len = 0;

        while let Some(id) = cursor {
            let node = arena.get_mut(id);
            node.child = child;
            child = Some(id);
            origin = id;
            len += 1;
            cursor = node.parent;
        }

        Self {
            arena,
            origin,
            terminal,
            len,
        }
    }

    /// Node count from start to destination inclusive.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nodes generated by the run that produced this path.
    pub fn generated(&self) -> usize {
        self.arena.len()
    }

    /// Moves taken, one fewer than [`Path::len`].
    pub fn steps(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Accumulated cost of the destination node.
    pub fn cost(&self) -> f64 {
        self.terminal().cost
    }

    pub fn origin(&self) -> &SearchNode {
        self.arena.get(self.origin)
    }

    pub fn terminal(&self) -> &SearchNode {
        self.arena.get(self.terminal)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.arena.get(id)
    }

    /// Nodes from start to destination, following child links.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(self.origin()), |node| {
            node.child.map(|id| self.arena.get(id))
        })
    }

    /// Nodes from destination back to start, following parent links.
    pub fn iter_back(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(self.terminal()), |node| {
            node.parent.map(|id| self.arena.get(id))
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().map(|node| node.position)
    }

    /// First node at `position` walking forward from the start.
    pub fn node_at(&self, position: Position) -> Option<&SearchNode> {
        self.iter().find(|node| node.position == position)
    }
}

/// Base-62 label used for compact coordinates (`0-9A-Za-z`); `?` past 61.
pub fn encode_label(index: i32) -> char {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    usize::try_from(index)
        .ok()
        .and_then(|index| DIGITS.get(index))
        .map_or('?', |&digit| digit as char)
}

impl fmt::Display for Path {
    /// Renders `[x,y] <- [x,y] <- ...` from destination back to start.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.iter_back().enumerate() {
            if index > 0 {
                f.write_str(" <- ")?;
            }
            write!(
                f,
                "[{},{}]",
                encode_label(node.position.x),
                encode_label(node.position.y)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let start = arena.push_start(Position::new(0, 0), 2.0);
        let stray = arena.push_child(start, Position::new(0, 1), 3.0, 0);
        let mid = arena.push_child(start, Position::new(1, 1), 2.0, 0);
        let end = arena.push_child(mid, Position::new(2, 2), 2.0, 1);
        assert_eq!(stray, NodeId(1));
        (arena, end)
    }

    #[test]
    fn reconstruct_links_children_forward() {
        let (arena, end) = chain();
        let path = Path::reconstruct(arena, end);

        assert_eq!(path.len(), 3);
        assert_eq!(path.steps(), 2);
        assert_eq!(
            path.positions().collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)]
        );
        assert_eq!(path.origin().child, Some(NodeId(2)));
        assert_eq!(path.terminal().child, None);
        // Nodes off the route keep no child link.
        assert_eq!(path.node(NodeId(1)).child, None);
    }

    #[test]
    fn backward_walk_mirrors_forward_walk() {
        let (arena, end) = chain();
        let path = Path::reconstruct(arena, end);

        let mut forward: Vec<_> = path.positions().collect();
        forward.reverse();
        let backward: Vec<_> = path.iter_back().map(|node| node.position).collect();
        assert_eq!(forward, backward);
        assert_eq!(path.to_string(), "[2,2] <- [1,1] <- [0,0]");
    }

    #[test]
    fn node_at_finds_route_nodes_only() {
        let (arena, end) = chain();
        let path = Path::reconstruct(arena, end);
        assert_eq!(path.node_at(Position::new(1, 1)).map(|n| n.id), Some(NodeId(2)));
        assert!(path.node_at(Position::new(0, 1)).is_none());
    }

    #[test]
    fn labels_use_base_62() {
        assert_eq!(encode_label(9), '9');
        assert_eq!(encode_label(10), 'A');
        assert_eq!(encode_label(61), 'z');
        assert_eq!(encode_label(62), '?');
        assert_eq!(encode_label(-1), '?');
    }
}
