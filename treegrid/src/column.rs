//! Column definitions and the cell-render contract.

use std::fmt;
use std::sync::Arc;

use crate::node::Node;
use crate::record::TreeRecord;
use crate::surface::{ElementId, Surface};

/// Trait for populating one cell of a row.
///
/// Renderers are injected per column at construction; the grid never
/// relies on any implicit receiver state.
pub trait CellRenderer<T: TreeRecord> {
    /// Populate `cell` for `node`. Column 0 renders into the lead cell,
    /// after the tree glyphs.
    fn render(&self, node: &Node<T>, cell: ElementId, surface: &mut dyn Surface);
}

/// One displayed table column.
///
/// # Example
///
/// ```
/// use treegrid::Column;
///
/// let column: Column<serde_json::Value> = Column::new("Name").field("name").class("label");
/// assert_eq!(column.title(), "Name");
/// ```
pub struct Column<T: TreeRecord> {
    title: String,
    field: Option<String>,
    class: Option<String>,
    renderer: Option<Arc<dyn CellRenderer<T>>>,
    index: usize,
}

impl<T: TreeRecord> Column<T> {
    /// Create a column with the given header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field: None,
            class: None,
            renderer: None,
            index: 0,
        }
    }

    /// Record field the default renderer writes as cell text.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.field = Some(name.into());
        self
    }

    /// CSS class the default renderer applies to the cell.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Replace the default renderer for this column.
    pub fn renderer(mut self, renderer: impl CellRenderer<T> + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Position of this column, assigned at grid construction.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn assign_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Columns without an explicit renderer get the default field
    /// renderer, capturing this column's field and class.
    pub(crate) fn ensure_renderer(&mut self) {
        if self.renderer.is_none() {
            self.renderer = Some(Arc::new(FieldRenderer::new(
                self.field.clone(),
                self.class.clone(),
            )));
        }
    }

    pub(crate) fn render_into(&self, node: &Node<T>, cell: ElementId, surface: &mut dyn Surface) {
        if let Some(renderer) = &self.renderer {
            renderer.render(node, cell, surface);
        }
    }
}

impl<T: TreeRecord> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("field", &self.field)
            .field("class", &self.class)
            .field("index", &self.index)
            .field("custom_renderer", &self.renderer.is_some())
            .finish()
    }
}

/// Default cell renderer: writes the record's named field as text and
/// applies the configured class. Each part is independent; an absent or
/// empty field value writes no text.
pub struct FieldRenderer {
    field: Option<String>,
    class: Option<String>,
}

impl FieldRenderer {
    pub fn new(field: Option<String>, class: Option<String>) -> Self {
        Self { field, class }
    }
}

impl<T: TreeRecord> CellRenderer<T> for FieldRenderer {
    fn render(&self, node: &Node<T>, cell: ElementId, surface: &mut dyn Surface) {
        if let Some(name) = &self.field {
            if let Some(value) = node.data.field(name) {
                if !value.is_empty() {
                    surface.append_text(cell, &value);
                }
            }
        }
        if let Some(class) = &self.class {
            surface.add_class(cell, class);
        }
    }
}
