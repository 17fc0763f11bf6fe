//! Grid configuration.

use crate::column::Column;
use crate::glyph::GlyphOverrides;
use crate::record::TreeRecord;

/// Configuration supplied once at [`TreeGrid`](crate::TreeGrid)
/// construction: glyph overrides and the ordered column list.
///
/// # Example
///
/// ```
/// use treegrid::{Column, GlyphOverrides, TreeGridConfig};
///
/// let config: TreeGridConfig<serde_json::Value> = TreeGridConfig::new()
///     .glyphs(GlyphOverrides::new().leaf("custom/dot.png"))
///     .column(Column::new("Name").field("name"))
///     .column(Column::new("Size").field("size"));
/// ```
pub struct TreeGridConfig<T: TreeRecord> {
    pub(crate) glyphs: GlyphOverrides,
    pub(crate) columns: Vec<Column<T>>,
}

impl<T: TreeRecord> TreeGridConfig<T> {
    pub fn new() -> Self {
        Self {
            glyphs: GlyphOverrides::default(),
            columns: Vec::new(),
        }
    }

    /// Override glyph image sources; unset entries keep the defaults.
    pub fn glyphs(mut self, overrides: GlyphOverrides) -> Self {
        self.glyphs = overrides;
        self
    }

    /// Append a column. Columns are immutable once the grid is built.
    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace the whole column list.
    pub fn columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.columns = columns;
        self
    }
}

impl<T: TreeRecord> Default for TreeGridConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}
