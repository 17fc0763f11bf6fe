//! Demo binary: draws a dataset as a tree table on an in-memory surface
//! and toggles a branch to show visibility patching.

mod dataset;
mod display;

use std::fs::File;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use treegrid::{
    CellRenderer, Column, ElementId, MemorySurface, Node, NodeId, Surface, TreeGrid,
    TreeGridConfig,
};

use dataset::SampleRecord;

/// Renders the number of direct children for branch rows.
struct ChildCountRenderer;

impl CellRenderer<SampleRecord> for ChildCountRenderer {
    fn render(&self, node: &Node<SampleRecord>, cell: ElementId, surface: &mut dyn Surface) {
        if node.has_children {
            surface.append_text(cell, &node.children.len().to_string());
        }
    }
}

fn main() {
    let log_file = File::create("treegrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), dataset::DatasetError> {
    let record = match std::env::args().nth(1) {
        Some(path) => dataset::load(&path)?,
        None => dataset::sample(),
    };
    info!(
        "loaded dataset '{}' with {} top-level entries",
        record.name,
        record.children.len()
    );

    let mut surface = MemorySurface::new();
    let root = surface.root();
    let table = surface.append_element_with_id(root, "table", "demo");

    let config = TreeGridConfig::new()
        .column(Column::new("Name").field("name").class("name"))
        .column(Column::new("Size").field("size"))
        .column(Column::new("Entries").renderer(ChildCountRenderer));
    let mut grid = TreeGrid::new(table, config);

    grid.set_root_data(&surface, &record);
    grid.draw_header(&mut surface);
    grid.draw(&mut surface);

    println!("Full tree ({} nodes):", grid.node_count());
    println!("{}", display::render_table(&surface, table));

    if let Some(target) = first_branch(&grid) {
        let id = grid
            .node(target)
            .map(|node| node.id.clone())
            .unwrap_or_default();
        // round-trip through the id lookup, the way a click handler would
        let target = grid.find_node_by_id(&id).unwrap_or(target);

        grid.toggle_expanded(&mut surface, target);
        println!("Collapsed {id}:");
        println!("{}", display::render_table(&surface, table));

        grid.toggle_expanded(&mut surface, target);
        println!("Expanded {id} again:");
        println!("{}", display::render_table(&surface, table));
    }

    Ok(())
}

/// First child of the root that has children of its own.
fn first_branch(grid: &TreeGrid<SampleRecord>) -> Option<NodeId> {
    let root = grid.root()?;
    grid.node(root)?
        .children
        .iter()
        .copied()
        .find(|&child| grid.node(child).map(|node| node.has_children).unwrap_or(false))
}
