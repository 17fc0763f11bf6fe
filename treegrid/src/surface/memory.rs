//! In-memory rendering surface.

use super::{ElementId, Surface};

/// What one surface entry holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    /// A container element with a tag name.
    Element(String),
    /// A text run.
    Text(String),
    /// An image with its current resource reference.
    Image(String),
}

/// One entry of the retained element tree.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    pub content: ElementContent,
    pub identifier: Option<String>,
    pub classes: Vec<String>,
    pub children: Vec<ElementId>,
}

impl MemoryElement {
    pub fn tag(&self) -> Option<&str> {
        match &self.content {
            ElementContent::Element(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            ElementContent::Text(content) => Some(content),
            _ => None,
        }
    }

    pub fn image_source(&self) -> Option<&str> {
        match &self.content {
            ElementContent::Image(source) => Some(source),
            _ => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A retained element tree kept entirely in memory.
///
/// Detached elements stay in the backing store; `clear_children` only
/// unlinks them, which is all the grid ever observes.
///
/// # Example
///
/// ```
/// use treegrid::{MemorySurface, Surface};
///
/// let mut surface = MemorySurface::new();
/// let root = surface.root();
/// let table = surface.append_element_with_id(root, "table", "demo");
/// assert_eq!(surface.identifier(table).as_deref(), Some("demo"));
/// ```
#[derive(Debug)]
pub struct MemorySurface {
    elements: Vec<MemoryElement>,
}

impl MemorySurface {
    /// Create a surface holding only the root container.
    pub fn new() -> Self {
        Self {
            elements: vec![MemoryElement {
                content: ElementContent::Element("root".to_string()),
                identifier: None,
                classes: Vec::new(),
                children: Vec::new(),
            }],
        }
    }

    /// The root container everything else hangs off.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn get(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(id.0)
    }

    /// First element carrying the given identifier attribute.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.identifier.as_deref() == Some(identifier))
            .map(ElementId)
    }

    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|element| element.children.as_slice()).unwrap_or(&[])
    }

    pub fn classes(&self, id: ElementId) -> &[String] {
        self.get(id).map(|element| element.classes.as_slice()).unwrap_or(&[])
    }

    /// Text runs directly under `id`, in order.
    pub fn texts(&self, id: ElementId) -> Vec<String> {
        self.children_of(id)
            .iter()
            .filter_map(|&child| self.get(child).and_then(|e| e.text().map(String::from)))
            .collect()
    }

    /// Structural dump of the whole tree, one entry per line.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        self.snapshot_into(self.root(), 0, &mut out);
        out
    }

    fn snapshot_into(&self, id: ElementId, depth: usize, out: &mut String) {
        let Some(element) = self.get(id) else {
            return;
        };
        for _ in 0..depth {
            out.push_str("  ");
        }
        match &element.content {
            ElementContent::Element(tag) => out.push_str(tag),
            ElementContent::Text(content) => {
                out.push('"');
                out.push_str(content);
                out.push('"');
            }
            ElementContent::Image(source) => {
                out.push_str("img(");
                out.push_str(source);
                out.push(')');
            }
        }
        if let Some(identifier) = &element.identifier {
            out.push('#');
            out.push_str(identifier);
        }
        for class in &element.classes {
            out.push('.');
            out.push_str(class);
        }
        out.push('\n');
        for &child in &element.children {
            self.snapshot_into(child, depth + 1, out);
        }
    }

    fn push(&mut self, parent: ElementId, content: ElementContent, identifier: Option<String>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(MemoryElement {
            content,
            identifier,
            classes: Vec::new(),
            children: Vec::new(),
        });
        if let Some(parent) = self.elements.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    fn append_element(&mut self, parent: ElementId, tag: &str) -> ElementId {
        self.push(parent, ElementContent::Element(tag.to_string()), None)
    }

    fn append_element_with_id(
        &mut self,
        parent: ElementId,
        tag: &str,
        identifier: &str,
    ) -> ElementId {
        self.push(
            parent,
            ElementContent::Element(tag.to_string()),
            Some(identifier.to_string()),
        )
    }

    fn append_text(&mut self, target: ElementId, text: &str) {
        self.push(target, ElementContent::Text(text.to_string()), None);
    }

    fn append_image(&mut self, target: ElementId, source: &str) -> ElementId {
        self.push(target, ElementContent::Image(source.to_string()), None)
    }

    fn set_image_source(&mut self, image: ElementId, source: &str) {
        if let Some(element) = self.elements.get_mut(image.0) {
            if let ElementContent::Image(current) = &mut element.content {
                *current = source.to_string();
            }
        }
    }

    fn add_class(&mut self, target: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(target.0) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, target: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(target.0) {
            element.classes.retain(|c| c != class);
        }
    }

    fn replace_class(&mut self, target: ElementId, old: &str, new: &str) {
        self.remove_class(target, old);
        self.add_class(target, new);
    }

    fn clear_children(&mut self, target: ElementId) {
        if let Some(element) = self.elements.get_mut(target.0) {
            element.children.clear();
        }
    }

    fn identifier(&self, target: ElementId) -> Option<String> {
        self.get(target).and_then(|element| element.identifier.clone())
    }
}
