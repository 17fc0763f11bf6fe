pub mod column;
pub mod config;
pub mod glyph;
pub mod grid;
pub mod node;
pub mod record;
pub mod surface;
pub mod visit;

pub use column::{CellRenderer, Column, FieldRenderer};
pub use config::TreeGridConfig;
pub use glyph::{GlyphKind, GlyphOverrides, GlyphSet};
pub use grid::TreeGrid;
pub use node::{Node, NodeArena, NodeId};
pub use record::TreeRecord;
pub use surface::{ElementContent, ElementId, MemoryElement, MemorySurface, Surface};
pub use visit::{preorder, visit};
