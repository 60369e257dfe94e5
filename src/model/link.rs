use serde::{Deserialize, Serialize};

/// Flat definition of one menu link, as registered with a menu store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuLinkModel {
    pub id: String,
    /// parent link reference, `None` for top-level links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub title: String,
    pub url: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// whether the current viewer may see the link
    #[serde(default = "default_true")]
    pub accessible: bool,
    /// sort weight among siblings, lighter first
    #[serde(default)]
    pub weight: i32,
}

fn default_true() -> bool {
    true
}
