//! Text rendering of a drawn grid for terminal output.

use treegrid::{ElementContent, ElementId, MemorySurface};
use unicode_width::UnicodeWidthStr;

/// Render the visible rows of a drawn table as an aligned text grid.
/// Rows carrying the hidden class are skipped, like a collapsed branch
/// in a real document.
pub fn render_table(surface: &MemorySurface, table: ElementId) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for &section in surface.children_of(table) {
        for &row in surface.children_of(section) {
            if surface.classes(row).iter().any(|class| class == "hidden") {
                continue;
            }
            let cells = surface
                .children_of(row)
                .iter()
                .map(|&cell| cell_text(surface, cell))
                .collect();
            rows.push(cells);
        }
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.width());
        }
    }

    let mut out = String::new();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            out.push_str("| ");
            out.push_str(cell);
            for _ in cell.width()..widths[index] {
                out.push(' ');
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out
}

fn cell_text(surface: &MemorySurface, cell: ElementId) -> String {
    let mut text = String::new();
    for &child in surface.children_of(cell) {
        let Some(element) = surface.get(child) else {
            continue;
        };
        match &element.content {
            ElementContent::Text(content) => text.push_str(content),
            ElementContent::Image(source) => text.push_str(glyph_text(source)),
            ElementContent::Element(_) => {}
        }
    }
    text
}

/// Terminal stand-ins for the default glyph images.
fn glyph_text(source: &str) -> &'static str {
    if source.ends_with("node-expanded.gif") {
        "▼ "
    } else if source.ends_with("node-collapsed.gif") {
        "▶ "
    } else if source.ends_with("leaf.gif") {
        "· "
    } else if source.ends_with("spacer.gif") {
        "  "
    } else {
        "? "
    }
}
