//! Pre-order traversal engine.
//!
//! The one mechanism behind full rendering, toggle propagation and id
//! lookup: walk a subtree depth-first in sibling order, collecting what
//! the visitor produces.

use crate::node::{Node, NodeArena, NodeId};
use crate::record::TreeRecord;

/// Node ids of the subtree under `start` (inclusive) in pre-order.
///
/// The sequence is a plain `Vec`, so callers can restart or interleave
/// arena mutation with iteration.
pub fn preorder<T: TreeRecord>(arena: &NodeArena<T>, start: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(node_id) = stack.pop() {
        let Some(node) = arena.get(node_id) else {
            continue;
        };
        order.push(node_id);
        for &child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    order
}

/// Apply `visitor` to every node of the subtree under `start` in
/// pre-order, collecting the `Some` results in visitation order.
pub fn visit<T, R, F>(arena: &NodeArena<T>, start: NodeId, mut visitor: F) -> Vec<R>
where
    T: TreeRecord,
    F: FnMut(&Node<T>) -> Option<R>,
{
    preorder(arena, start)
        .into_iter()
        .filter_map(|node_id| arena.get(node_id).and_then(|node| visitor(node)))
        .collect()
}
