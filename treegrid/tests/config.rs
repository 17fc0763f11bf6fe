//! Tests for construction-time configuration resolution.

use serde_json::{json, Value};
use treegrid::{Column, GlyphOverrides, MemorySurface, Surface, TreeGrid, TreeGridConfig};

#[test]
fn test_glyph_overrides_reach_rendering() {
    let mut surface = MemorySurface::new();
    let root = surface.root();
    let table = surface.append_element_with_id(root, "table", "t");

    let config = TreeGridConfig::new()
        .glyphs(GlyphOverrides::new().last_node_expanded("custom/open.png"))
        .column(Column::new("Name").field("name"));
    let mut grid = TreeGrid::new(table, config);
    grid.set_root_data(&surface, &json!({"name": "root", "children": [{"name": "a"}]}));
    grid.draw(&mut surface);

    assert_eq!(grid.glyphs().last_node_expanded, "custom/open.png");
    assert_eq!(grid.glyphs().leaf, "images/leaf.gif", "unset entries keep defaults");

    let snapshot = surface.snapshot();
    assert!(snapshot.contains("img(custom/open.png)"));
    assert!(snapshot.contains("img(images/last-leaf.gif)"));
}

#[test]
fn test_column_indices_assigned_in_order() {
    let config: TreeGridConfig<Value> = TreeGridConfig::new()
        .column(Column::new("Name").field("name"))
        .column(Column::new("Size").field("size"))
        .column(Column::new("Notes"));
    let surface = MemorySurface::new();
    let grid = TreeGrid::new(surface.root(), config);

    let indices: Vec<_> = grid.columns().iter().map(|column| column.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(grid.columns()[1].title(), "Size");
    assert_eq!(grid.columns()[1].field_name(), Some("size"));
    assert_eq!(grid.columns()[2].field_name(), None);
}

#[test]
fn test_grid_without_columns_still_draws_rows() {
    let mut surface = MemorySurface::new();
    let root = surface.root();
    let table = surface.append_element_with_id(root, "table", "t");

    let config: TreeGridConfig<Value> = TreeGridConfig::new();
    let mut grid = TreeGrid::new(table, config);
    grid.set_root_data(&surface, &json!({"name": "root", "children": [{"name": "a"}]}));
    grid.draw(&mut surface);

    let body = surface
        .children_of(table)
        .iter()
        .copied()
        .find(|&child| surface.get(child).and_then(|e| e.tag()) == Some("tbody"))
        .expect("body section");
    assert_eq!(surface.children_of(body).len(), 2);
}
