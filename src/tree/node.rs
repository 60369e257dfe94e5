use serde::{Deserialize, Serialize};

/// menu link id
pub type LinkId = String;

/// One entry of a hierarchical menu link tree.
///
/// Children are kept in traversal order. The tree is handed to the pager by a
/// [`MenuTreeProvider`](crate::MenuTreeProvider) after access checks and sorting
/// have been applied, and is never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuLinkNode {
    /// link id, unique within the menu
    pub id: LinkId,
    /// parent link id, `None` for top-level links
    #[serde(default)]
    pub parent_id: Option<LinkId>,
    /// display text
    pub title: String,
    /// resolved destination
    pub target: String,
    /// disabled links are never emitted, their children still are
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// child links
    #[serde(default)]
    pub children: Vec<MenuLinkNode>,
}

fn default_enabled() -> bool {
    true
}

impl MenuLinkNode {
    pub fn new(
        id: impl Into<LinkId>,
        title: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            title: title.into(),
            target: target.into(),
            enabled: true,
            children: Vec::new(),
        }
    }

    /// Append a child, pointing its parent id at this link.
    pub fn child(
        mut self,
        mut node: MenuLinkNode,
    ) -> Self {
        node.parent_id = Some(self.id.clone());
        self.children.push(node);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
