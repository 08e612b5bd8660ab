//! Search-time records and the arena that owns them.

use std::fmt;

use crate::state::{Offset, Position};

/// Generation id of a search node.
///
/// Ids are handed out in creation order within one search run and double as
/// arena indices; they are never reused until the next run resets the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grid cell reached through one specific chain of moves.
///
/// Several nodes may share a position when they were reached through
/// different parents.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub id: NodeId,
    pub position: Position,
    /// `g + h + surcharge` at the time the node was generated.
    pub cost: f64,
    /// Moves from the start node (`g`).
    pub steps: u32,
    pub parent: Option<NodeId>,
    /// Set only by path reconstruction.
    pub child: Option<NodeId>,
    /// Consecutive straight moves ending at this node.
    pub inertia: u32,
    /// Move that led here from the parent.
    pub heading: Option<Offset>,
}

impl SearchNode {
    pub fn is_start(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for the nodes of one search run.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the root node of a run.
    pub fn push_start(&mut self, position: Position, cost: f64) -> NodeId {
        self.push(SearchNode {
            id: self.next_id(),
            position,
            cost,
            steps: 0,
            parent: None,
            child: None,
            inertia: 0,
            heading: None,
        })
    }

    /// Creates a node one step away from `parent`.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        position: Position,
        cost: f64,
        inertia: u32,
    ) -> NodeId {
        let parent_node = &self.nodes[parent.index()];
        let node = SearchNode {
            id: self.next_id(),
            position,
            cost,
            steps: parent_node.steps + 1,
            parent: Some(parent),
            child: None,
            inertia,
            heading: Some(parent_node.position.offset_to(position)),
        };
        self.push(node)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes generated so far in this run.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Forgets every node and restarts generation ids at zero.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len() as u32)
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }
}
