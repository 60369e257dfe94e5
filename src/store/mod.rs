//! Collaborators the pager depends on, and an in-memory implementation.
//!
//! The pager never reads menus itself. It is handed:
//! - a [`MenuTreeProvider`] returning the access-checked, sorted link tree of a menu
//! - an [`ActiveLinkLocator`] naming the active link of the current request
//! - a [`LinkMetadataResolver`] mapping a link's parent reference to a link id
//!
//! [`MemMenuStore`] implements the tree provider and metadata resolver over
//! registered [`MenuModel`](crate::MenuModel)s; [`PathActiveLinkLocator`]
//! finds the active link of a request path in such a store.

mod locator;
mod mem;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    tree::{LinkId, MenuLinkNode},
};

pub use locator::PathActiveLinkLocator;
pub use mem::MemMenuStore;

/// The link matching the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLink {
    pub id: LinkId,
    pub menu_id: String,
    /// parent reference as declared by the link, resolved through a [`LinkMetadataResolver`]
    #[serde(default)]
    pub parent: Option<String>,
}

/// Source of menu link trees.
pub trait MenuTreeProvider: Send + Sync {
    /// Load the full tree of `menu_id`, already access-checked and sorted.
    fn load_tree(
        &self,
        menu_id: &str,
    ) -> Result<Vec<MenuLinkNode>>;
}

/// Reports which link, if any, is active for the current request.
pub trait ActiveLinkLocator {
    fn active_link(&self) -> Option<ActiveLink>;
}

/// Link metadata lookups, scoped to one menu.
pub trait LinkMetadataResolver: Send + Sync {
    /// The parent reference declared by `link_id` in `menu_id`.
    fn parent_reference(
        &self,
        menu_id: &str,
        link_id: &str,
    ) -> Option<String>;

    /// Map a parent reference to the parent's own id. `None` if it names no link of `menu_id`.
    fn resolve_parent_id(
        &self,
        menu_id: &str,
        reference: &str,
    ) -> Option<LinkId>;
}
