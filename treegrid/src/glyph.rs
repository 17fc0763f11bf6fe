//! Tree connector and expand/collapse glyph images.

/// The eight glyph variants a row can carry.
///
/// Spacers draw the indentation/connector columns for ancestors, the
/// node/leaf variants mark the row's own state. `Last*` variants are
/// used when the corresponding node is the last of its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Spacer,
    LastSpacer,
    NodeExpanded,
    LastNodeExpanded,
    NodeCollapsed,
    LastNodeCollapsed,
    Leaf,
    LastLeaf,
}

/// Image resource references for every glyph variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub spacer: String,
    pub last_spacer: String,
    pub node_expanded: String,
    pub last_node_expanded: String,
    pub node_collapsed: String,
    pub last_node_collapsed: String,
    pub leaf: String,
    pub last_leaf: String,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            spacer: "images/spacer.gif".to_string(),
            last_spacer: "images/last-spacer.gif".to_string(),
            node_expanded: "images/node-expanded.gif".to_string(),
            last_node_expanded: "images/last-node-expanded.gif".to_string(),
            node_collapsed: "images/node-collapsed.gif".to_string(),
            last_node_collapsed: "images/last-node-collapsed.gif".to_string(),
            leaf: "images/leaf.gif".to_string(),
            last_leaf: "images/last-leaf.gif".to_string(),
        }
    }
}

impl GlyphSet {
    /// The image source for a glyph variant.
    pub fn source(&self, kind: GlyphKind) -> &str {
        match kind {
            GlyphKind::Spacer => &self.spacer,
            GlyphKind::LastSpacer => &self.last_spacer,
            GlyphKind::NodeExpanded => &self.node_expanded,
            GlyphKind::LastNodeExpanded => &self.last_node_expanded,
            GlyphKind::NodeCollapsed => &self.node_collapsed,
            GlyphKind::LastNodeCollapsed => &self.last_node_collapsed,
            GlyphKind::Leaf => &self.leaf,
            GlyphKind::LastLeaf => &self.last_leaf,
        }
    }
}

/// Caller-supplied glyph overrides, resolved over the defaults once at
/// construction. Unset entries keep the base source.
#[derive(Debug, Clone, Default)]
pub struct GlyphOverrides {
    pub spacer: Option<String>,
    pub last_spacer: Option<String>,
    pub node_expanded: Option<String>,
    pub last_node_expanded: Option<String>,
    pub node_collapsed: Option<String>,
    pub last_node_collapsed: Option<String>,
    pub leaf: Option<String>,
    pub last_leaf: Option<String>,
}

impl GlyphOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacer(mut self, source: impl Into<String>) -> Self {
        self.spacer = Some(source.into());
        self
    }

    pub fn last_spacer(mut self, source: impl Into<String>) -> Self {
        self.last_spacer = Some(source.into());
        self
    }

    pub fn node_expanded(mut self, source: impl Into<String>) -> Self {
        self.node_expanded = Some(source.into());
        self
    }

    pub fn last_node_expanded(mut self, source: impl Into<String>) -> Self {
        self.last_node_expanded = Some(source.into());
        self
    }

    pub fn node_collapsed(mut self, source: impl Into<String>) -> Self {
        self.node_collapsed = Some(source.into());
        self
    }

    pub fn last_node_collapsed(mut self, source: impl Into<String>) -> Self {
        self.last_node_collapsed = Some(source.into());
        self
    }

    pub fn leaf(mut self, source: impl Into<String>) -> Self {
        self.leaf = Some(source.into());
        self
    }

    pub fn last_leaf(mut self, source: impl Into<String>) -> Self {
        self.last_leaf = Some(source.into());
        self
    }

    /// Resolve these overrides over a base set.
    pub fn over(self, base: GlyphSet) -> GlyphSet {
        GlyphSet {
            spacer: self.spacer.unwrap_or(base.spacer),
            last_spacer: self.last_spacer.unwrap_or(base.last_spacer),
            node_expanded: self.node_expanded.unwrap_or(base.node_expanded),
            last_node_expanded: self.last_node_expanded.unwrap_or(base.last_node_expanded),
            node_collapsed: self.node_collapsed.unwrap_or(base.node_collapsed),
            last_node_collapsed: self.last_node_collapsed.unwrap_or(base.last_node_collapsed),
            leaf: self.leaf.unwrap_or(base.leaf),
            last_leaf: self.last_leaf.unwrap_or(base.last_leaf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_keep_unset_entries() {
        let set = GlyphOverrides::new()
            .node_expanded("custom/open.png")
            .over(GlyphSet::default());
        assert_eq!(set.node_expanded, "custom/open.png");
        assert_eq!(set.spacer, "images/spacer.gif");
    }

    #[test]
    fn test_empty_overrides_are_identity() {
        let set = GlyphOverrides::new().over(GlyphSet::default());
        assert_eq!(set, GlyphSet::default());
    }

    #[test]
    fn test_source_by_kind() {
        let set = GlyphSet::default();
        assert_eq!(set.source(GlyphKind::LastLeaf), "images/last-leaf.gif");
        assert_eq!(
            set.source(GlyphKind::NodeCollapsed),
            "images/node-collapsed.gif"
        );
    }
}
