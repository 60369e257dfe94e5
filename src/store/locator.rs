use std::sync::Arc;

use crate::store::{ActiveLink, ActiveLinkLocator, MemMenuStore};

/// Finds the active link of one request path.
///
/// The first enabled and accessible link, across menus in registration order,
/// whose url equals the path is active. A locator is built per request.
#[derive(Debug, Clone)]
pub struct PathActiveLinkLocator {
    store: Arc<MemMenuStore>,
    path: String,
}

impl PathActiveLinkLocator {
    pub fn new(
        store: Arc<MemMenuStore>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ActiveLinkLocator for PathActiveLinkLocator {
    fn active_link(&self) -> Option<ActiveLink> {
        self.store.find_link_by_url(&self.path).map(|(menu_id, link)| ActiveLink {
            id: link.id,
            menu_id,
            parent: link.parent,
        })
    }
}
