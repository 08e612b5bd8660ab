//! Open and closed sets.
//!
//! The frontier pops the cheapest node, breaking cost ties in favour of the
//! node generated first. Both sets answer "is any node at this position
//! here" in constant time.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::state::Position;

use super::node::{NodeArena, NodeId};

#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: f64,
    id: NodeId,
    position: Position,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap yields the lowest cost, then the lowest id.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Nodes discovered but not yet expanded.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    positions: HashSet<Position>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, arena: &NodeArena, id: NodeId) {
        let node = arena.get(id);
        self.positions.insert(node.position);
        self.heap.push(Entry {
            cost: node.cost,
            id,
            position: node.position,
        });
    }

    /// Removes and returns the cheapest node.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.position);
        Some(entry.id)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }
}

/// Nodes already expanded. Never re-expanded.
#[derive(Clone, Debug, Default)]
pub struct Visited {
    order: Vec<NodeId>,
    positions: HashSet<Position>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, arena: &NodeArena, id: NodeId) {
        self.positions.insert(arena.get(id).position);
        self.order.push(id);
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Expanded nodes in expansion order.
    pub fn ids(&self) -> &[NodeId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.positions.clear();
    }
}
