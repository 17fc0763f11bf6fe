//! Tests for tree construction invariants.

use serde_json::{json, Value};
use treegrid::{Column, MemorySurface, NodeArena, Surface, TreeGrid, TreeGridConfig};

fn sample() -> Value {
    json!({
        "name": "root",
        "children": [
            {"name": "a"},
            {"name": "b", "children": [{"name": "c"}]}
        ]
    })
}

#[test]
fn test_depth_and_index() {
    let arena = NodeArena::build("t_Node", &sample());
    let root = arena.root();
    let root_node = arena.get(root).unwrap();
    assert_eq!(root_node.depth, 0);
    assert_eq!(root_node.index, 0);

    let a = root_node.children[0];
    let b = root_node.children[1];
    assert_eq!(arena.get(a).unwrap().depth, 1);
    assert_eq!(arena.get(b).unwrap().depth, 1);
    assert_eq!(arena.get(a).unwrap().index, 0);
    assert_eq!(arena.get(b).unwrap().index, 1);

    let c = arena.get(b).unwrap().children[0];
    assert_eq!(arena.get(c).unwrap().depth, 2);
    assert_eq!(arena.get(c).unwrap().parent, Some(b));
}

#[test]
fn test_is_last() {
    let arena = NodeArena::build("t_Node", &sample());
    let root_node = arena.get(arena.root()).unwrap();
    assert!(root_node.is_last, "root counts as last");

    let a = arena.get(root_node.children[0]).unwrap();
    let b = arena.get(root_node.children[1]).unwrap();
    assert!(!a.is_last);
    assert!(b.is_last);
    assert!(arena.get(b.children[0]).unwrap().is_last, "only child is last");
}

#[test]
fn test_has_children_and_default_expansion() {
    let arena = NodeArena::build("t_Node", &sample());
    let root_node = arena.get(arena.root()).unwrap();
    assert!(root_node.has_children);
    assert!(root_node.expanded, "expandable nodes start expanded");

    let a = arena.get(root_node.children[0]).unwrap();
    let b = arena.get(root_node.children[1]).unwrap();
    assert!(!a.has_children);
    assert!(b.has_children);
    assert!(b.expanded);
}

#[test]
fn test_ids_follow_sibling_path() {
    let arena = NodeArena::build("t_Node", &sample());
    let root_node = arena.get(arena.root()).unwrap();
    assert_eq!(root_node.id, "t_Node");

    let b = arena.get(root_node.children[1]).unwrap();
    assert_eq!(arena.get(root_node.children[0]).unwrap().id, "t_Node_0");
    assert_eq!(b.id, "t_Node_1");
    assert_eq!(arena.get(b.children[0]).unwrap().id, "t_Node_1_0");
}

#[test]
fn test_empty_children_sequence_is_leaf() {
    let record = json!({"name": "root", "children": []});
    let arena = NodeArena::build("t_Node", &record);
    assert_eq!(arena.len(), 1);
    assert!(!arena.get(arena.root()).unwrap().has_children);
}

#[test]
fn test_root_id_derived_from_table_identifier() {
    let mut surface = MemorySurface::new();
    let root = surface.root();
    let table = surface.append_element_with_id(root, "table", "metrics");

    let config = TreeGridConfig::new().column(Column::new("Name").field("name"));
    let mut grid = TreeGrid::new(table, config);
    grid.set_root_data(&surface, &sample());

    let root_id = grid.node(grid.root().unwrap()).unwrap().id.clone();
    assert_eq!(root_id, "metrics_Node");
}

#[test]
fn test_root_id_without_table_identifier() {
    let mut surface = MemorySurface::new();
    let root = surface.root();
    let table = surface.append_element(root, "table");

    let config = TreeGridConfig::new().column(Column::new("Name").field("name"));
    let mut grid = TreeGrid::new(table, config);
    grid.set_root_data(&surface, &sample());

    assert_eq!(grid.node(grid.root().unwrap()).unwrap().id, "_Node");
}

#[test]
fn test_set_root_data_replaces_tree() {
    let mut surface = MemorySurface::new();
    let root = surface.root();
    let table = surface.append_element_with_id(root, "table", "t");

    let config = TreeGridConfig::new().column(Column::new("Name").field("name"));
    let mut grid = TreeGrid::new(table, config);
    assert!(!grid.has_tree());

    grid.set_root_data(&surface, &sample());
    assert_eq!(grid.node_count(), 4);

    grid.set_root_data(&surface, &json!({"name": "lone"}));
    assert_eq!(grid.node_count(), 1);
    assert!(grid.find_node_by_id("t_Node_1").is_none());
}
