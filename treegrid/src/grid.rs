//! The tree-table component.

use log::{debug, trace};

use crate::column::Column;
use crate::config::TreeGridConfig;
use crate::glyph::{GlyphKind, GlyphSet};
use crate::node::{Node, NodeArena, NodeId};
use crate::record::TreeRecord;
use crate::surface::{ElementId, Surface};
use crate::visit::{preorder, visit};

const CLASS_LEAD_CELL: &str = "headCell";
const CLASS_VISIBLE: &str = "visible";
const CLASS_HIDDEN: &str = "hidden";
const CLASS_ICON: &str = "icon";
const CLASS_CLICKABLE: &str = "clickable";

/// Renders a hierarchical dataset as an expandable/collapsible table.
///
/// The grid builds a node arena from nested records, draws every node
/// into a row of the host table, and patches row visibility classes on
/// expand/collapse without re-rendering row content.
///
/// # Example
///
/// ```ignore
/// let config = TreeGridConfig::new()
///     .column(Column::new("Name").field("name"))
///     .column(Column::new("Size").field("size"));
/// let mut grid = TreeGrid::new(table, config);
/// grid.set_root_data(&surface, &record);
/// grid.draw_header(&mut surface);
/// grid.draw(&mut surface);
/// ```
pub struct TreeGrid<T: TreeRecord> {
    table: ElementId,
    body: Option<ElementId>,
    glyphs: GlyphSet,
    columns: Vec<Column<T>>,
    arena: Option<NodeArena<T>>,
}

impl<T: TreeRecord> TreeGrid<T> {
    /// Create a grid over the given table element.
    ///
    /// Glyph overrides are resolved against the defaults here, and every
    /// column without an explicit renderer receives the default field
    /// renderer. Neither changes afterwards.
    pub fn new(table: ElementId, config: TreeGridConfig<T>) -> Self {
        let TreeGridConfig { glyphs, mut columns } = config;
        let glyphs = glyphs.over(GlyphSet::default());
        for (index, column) in columns.iter_mut().enumerate() {
            column.assign_index(index);
            column.ensure_renderer();
        }
        Self {
            table,
            body: None,
            glyphs,
            columns,
            arena: None,
        }
    }

    /// (Re)build the tree from a root record.
    ///
    /// The previous tree is discarded; rows drawn for it are stale until
    /// the next [`draw`](Self::draw). The root node id is derived from
    /// the table element's identifier attribute.
    pub fn set_root_data(&mut self, surface: &dyn Surface, record: &T) {
        let prefix = surface.identifier(self.table).unwrap_or_default();
        let arena = NodeArena::build(format!("{prefix}_Node"), record);
        debug!("set_root_data: rebuilt tree with {} nodes", arena.len());
        self.arena = Some(arena);
    }

    /// Append the header row: one cell per column, title text only.
    ///
    /// Re-invocation appends a duplicate header; call it once per table
    /// lifetime.
    pub fn draw_header(&self, surface: &mut dyn Surface) {
        let head = surface.append_element(self.table, "thead");
        let row = surface.append_element(head, "tr");
        for column in &self.columns {
            let cell = surface.append_element(row, "td");
            surface.append_text(cell, column.title());
        }
    }

    /// Render the body from the current tree state.
    ///
    /// Clears previously rendered rows (creating the body container on
    /// first call) and renders every node, visible or not; rows under a
    /// collapsed ancestor are marked with the hidden class so later
    /// toggles only flip classes. A no-op before any tree is built.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let Some(arena) = self.arena.as_mut() else {
            return;
        };
        let body = match self.body {
            Some(body) => {
                surface.clear_children(body);
                body
            }
            None => {
                let body = surface.append_element(self.table, "tbody");
                self.body = Some(body);
                body
            }
        };
        let order = preorder(arena, arena.root());
        debug!("draw: rendering {} rows", order.len());
        for node_id in order {
            append_row(surface, arena, &self.glyphs, &self.columns, body, node_id);
        }
    }

    /// Flip one node's expansion state and patch descendant visibility.
    ///
    /// Returns `false` (not handled, nothing touched) for leaves.
    /// Otherwise the cached toggle glyph is swapped and every descendant
    /// row's class is replaced according to the new state. Row content
    /// is never regenerated here. Propagation is flat: it does not
    /// re-check collapsed intermediate ancestors, so expanding a node
    /// also reveals descendants of an independently collapsed child.
    pub fn toggle_expanded(&mut self, surface: &mut dyn Surface, node_id: NodeId) -> bool {
        let Some(arena) = self.arena.as_mut() else {
            return false;
        };
        let expanded = {
            let Some(node) = arena.get_mut(node_id) else {
                return false;
            };
            if !node.has_children {
                return false;
            }
            node.expanded = !node.expanded;
            node.expanded
        };
        if let Some(node) = arena.get(node_id) {
            debug!("toggle_expanded: {} expanded={}", node.id, expanded);
            if let Some(glyph) = node.toggle_glyph {
                surface.set_image_source(glyph, self.glyphs.source(node.glyph_kind()));
            }
        }
        let (old_class, new_class) = if expanded {
            (CLASS_HIDDEN, CLASS_VISIBLE)
        } else {
            (CLASS_VISIBLE, CLASS_HIDDEN)
        };
        for descendant in preorder(arena, node_id).into_iter().skip(1) {
            if let Some(row) = arena.get(descendant).and_then(|node| node.row) {
                surface.replace_class(row, old_class, new_class);
            }
        }
        true
    }

    /// Expand every expandable node and reveal every row.
    pub fn expand_all(&mut self, surface: &mut dyn Surface) {
        self.set_all_expanded(surface, true);
    }

    /// Collapse every expandable node; only top-level rows stay visible.
    pub fn collapse_all(&mut self, surface: &mut dyn Surface) {
        self.set_all_expanded(surface, false);
    }

    /// Whole-tree expansion change: update state and glyphs, then
    /// re-class every row from its full ancestor chain.
    fn set_all_expanded(&mut self, surface: &mut dyn Surface, expanded: bool) {
        let Some(arena) = self.arena.as_mut() else {
            return;
        };
        debug!("set_all_expanded: {expanded}");
        for node_id in preorder(arena, arena.root()) {
            let Some(node) = arena.get_mut(node_id) else {
                continue;
            };
            if !node.has_children || node.expanded == expanded {
                continue;
            }
            node.expanded = expanded;
            let kind = node.glyph_kind();
            if let Some(glyph) = node.toggle_glyph {
                surface.set_image_source(glyph, self.glyphs.source(kind));
            }
        }
        for node_id in preorder(arena, arena.root()) {
            let Some(row) = arena.get(node_id).and_then(|node| node.row) else {
                continue;
            };
            let (old_class, new_class) = if arena.is_visible(node_id) {
                (CLASS_HIDDEN, CLASS_VISIBLE)
            } else {
                (CLASS_VISIBLE, CLASS_HIDDEN)
            };
            surface.replace_class(row, old_class, new_class);
        }
    }

    /// Locate a node by its string id. `None` without a tree or for an
    /// unknown id.
    pub fn find_node_by_id(&self, id: &str) -> Option<NodeId> {
        self.arena.as_ref().and_then(|arena| arena.find_by_id(id))
    }

    /// Apply a visitor to every node from the root in pre-order,
    /// collecting the `Some` results. Empty when no tree is built.
    pub fn visit_root<R>(&self, visitor: impl FnMut(&Node<T>) -> Option<R>) -> Vec<R> {
        match &self.arena {
            Some(arena) => visit(arena, arena.root(), visitor),
            None => Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn table(&self) -> ElementId {
        self.table
    }

    pub fn has_tree(&self) -> bool {
        self.arena.is_some()
    }

    /// Root node id of the current tree, if one is built.
    pub fn root(&self) -> Option<NodeId> {
        self.arena.as_ref().map(|arena| arena.root())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.as_ref().and_then(|arena| arena.get(id))
    }

    pub fn node_count(&self) -> usize {
        self.arena.as_ref().map(|arena| arena.len()).unwrap_or(0)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.node(id).map(|node| node.expanded).unwrap_or(false)
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }
}

/// Render one node into a fresh row of `body`.
fn append_row<T: TreeRecord>(
    surface: &mut dyn Surface,
    arena: &mut NodeArena<T>,
    glyphs: &GlyphSet,
    columns: &[Column<T>],
    body: ElementId,
    node_id: NodeId,
) {
    let Some(node) = arena.get(node_id) else {
        return;
    };
    let row = surface.append_element_with_id(body, "tr", &node.id);
    let cell = surface.append_element(row, "td");
    surface.add_class(cell, CLASS_LEAD_CELL);

    // Spacer glyphs for each strict ancestor, root to parent; a collapsed
    // ancestor anywhere on the path hides the row.
    let ancestors = match node.parent {
        Some(parent) => arena.path(parent),
        None => Vec::new(),
    };
    let mut visible = true;
    for ancestor_id in ancestors {
        let Some(ancestor) = arena.get(ancestor_id) else {
            continue;
        };
        let kind = if ancestor.is_last {
            GlyphKind::LastSpacer
        } else {
            GlyphKind::Spacer
        };
        append_glyph(surface, glyphs, cell, kind);
        if !ancestor.expanded {
            visible = false;
        }
    }
    surface.add_class(row, if visible { CLASS_VISIBLE } else { CLASS_HIDDEN });

    let Some(node) = arena.get(node_id) else {
        return;
    };
    let kind = node.glyph_kind();
    let has_children = node.has_children;
    trace!("append_row: {} {kind:?} visible={visible}", node.id);
    let glyph = append_glyph(surface, glyphs, cell, kind);
    if has_children {
        surface.add_class(glyph, CLASS_CLICKABLE);
    }

    if let Some(node) = arena.get_mut(node_id) {
        node.row = Some(row);
        if has_children {
            node.toggle_glyph = Some(glyph);
        }
    }

    let Some(node) = arena.get(node_id) else {
        return;
    };
    if let Some(first) = columns.first() {
        first.render_into(node, cell, surface);
    }
    for column in columns.iter().skip(1) {
        let extra = surface.append_element(row, "td");
        column.render_into(node, extra, surface);
    }
}

fn append_glyph(
    surface: &mut dyn Surface,
    glyphs: &GlyphSet,
    cell: ElementId,
    kind: GlyphKind,
) -> ElementId {
    let image = surface.append_image(cell, glyphs.source(kind));
    surface.add_class(image, CLASS_ICON);
    image
}
