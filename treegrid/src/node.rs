//! Arena-backed node graph mirroring the input records.

use serde::Serialize;

use crate::glyph::GlyphKind;
use crate::record::TreeRecord;
use crate::surface::ElementId;
use crate::visit::preorder;

/// Index of a node inside a [`NodeArena`].
///
/// Parent and child links are stored as indices, never as live
/// references, so the arena owns every node exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

/// One row of the tree.
#[derive(Debug, Clone, Serialize)]
pub struct Node<T> {
    /// Stable identifier derived from the path of sibling indices:
    /// the root is `"{table-identifier}_Node"`, a child appends
    /// `"_{index}"` to its parent's id. Doubles as the rendered row's
    /// identifier attribute.
    pub id: String,
    /// Owning node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Ordered children. Empty for leaves.
    pub children: Vec<NodeId>,
    /// Root is 0, each child is parent + 1.
    pub depth: usize,
    /// 0-based position among siblings.
    pub index: usize,
    /// Whether this node is the last of its siblings. The root counts
    /// as last.
    pub is_last: bool,
    /// Expansion state. Starts `true` for nodes with children and is
    /// never consulted for leaves.
    pub expanded: bool,
    /// Whether the source record carried a non-empty child sequence.
    pub has_children: bool,
    /// The originating record.
    pub data: T,
    /// Rendered row handle, set by `draw`.
    #[serde(skip)]
    pub row: Option<ElementId>,
    /// Clickable expand/collapse glyph handle; only set for nodes with
    /// children.
    #[serde(skip)]
    pub toggle_glyph: Option<ElementId>,
}

impl<T> Node<T> {
    /// Select the glyph for this node: expandable nodes pick from the
    /// {node, lastNode} x {Expanded, Collapsed} grid, leaves from
    /// {leaf, lastLeaf}.
    pub fn glyph_kind(&self) -> GlyphKind {
        if self.has_children {
            match (self.is_last, self.expanded) {
                (true, true) => GlyphKind::LastNodeExpanded,
                (true, false) => GlyphKind::LastNodeCollapsed,
                (false, true) => GlyphKind::NodeExpanded,
                (false, false) => GlyphKind::NodeCollapsed,
            }
        } else if self.is_last {
            GlyphKind::LastLeaf
        } else {
            GlyphKind::Leaf
        }
    }
}

/// Flat storage for one tree instance. Rebuilt wholesale whenever new
/// root data is supplied; expand/collapse only mutates node state.
#[derive(Debug, Clone, Serialize)]
pub struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T: TreeRecord> NodeArena<T> {
    /// Build an arena from a root record, depth-first, preserving the
    /// input order. Records without children are leaves; nothing is an
    /// error.
    pub fn build(root_id: impl Into<String>, record: &T) -> Self {
        let mut arena = Self { nodes: Vec::new() };
        arena.nodes.push(Node {
            id: root_id.into(),
            parent: None,
            children: Vec::new(),
            depth: 0,
            index: 0,
            is_last: true,
            expanded: false,
            has_children: false,
            data: record.clone(),
            row: None,
            toggle_glyph: None,
        });
        arena.attach_children(NodeId(0), record);
        arena
    }

    fn attach_children(&mut self, parent: NodeId, record: &T) {
        let children = record.children();
        if children.is_empty() {
            return;
        }
        self.nodes[parent.0].has_children = true;
        self.nodes[parent.0].expanded = true;
        let last = children.len() - 1;
        for (index, child) in children.iter().enumerate() {
            let id = format!("{}_{}", self.nodes[parent.0].id, index);
            let depth = self.nodes[parent.0].depth + 1;
            let node_id = NodeId(self.nodes.len());
            self.nodes.push(Node {
                id,
                parent: Some(parent),
                children: Vec::new(),
                depth,
                index,
                is_last: index == last,
                expanded: false,
                has_children: false,
                data: child.clone(),
                row: None,
                toggle_glyph: None,
            });
            self.nodes[parent.0].children.push(node_id);
            self.attach_children(node_id, child);
        }
    }

    /// The root node id. An arena always holds at least the root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes from the root down to `id` inclusive, in root-first order.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.get(node_id).and_then(|node| node.parent);
        }
        path.reverse();
        path
    }

    /// Whether every strict ancestor of `id` is expanded.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut current = self.get(id).and_then(|node| node.parent);
        while let Some(node_id) = current {
            match self.get(node_id) {
                Some(node) if !node.expanded => return false,
                Some(node) => current = node.parent,
                None => return true,
            }
        }
        true
    }

    /// First node whose id matches, in pre-order. Ids are unique per
    /// tree instance, so the first match is the only one.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        preorder(self, self.root())
            .into_iter()
            .find(|&candidate| self.nodes[candidate.0].id == id)
    }
}
