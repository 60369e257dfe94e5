//! The menu pager service and its block adapter.

mod block;
mod deriver;
mod render;

use std::sync::Arc;

use tracing::trace;

use crate::{
    Result,
    common::{NavigationCache, NavigationKey},
    navigation::{NavigationResult, ResolutionOptions, resolve_navigation},
    store::{ActiveLink, LinkMetadataResolver, MenuTreeProvider},
    tree::{IgnoreTargets, flatten},
};

pub use block::{PagerBlock, PagerBlockConfig, URL_PATH_CACHE_CONTEXT, merge_cache_contexts};
pub use deriver::{PAGER_BASE_ID, PagerDefinition, PagerDeriver};
pub use render::{PAGER_LIBRARY, PagerDirection, PagerFragment, PagerItem};

/// Resolves previous/next links for active menu links.
///
/// Collaborators are injected through [`MenuPagerBuilder`](crate::MenuPagerBuilder).
/// With a cache configured, results are memoized by menu, active link and the
/// restrict setting until [`MenuPager::end_request`].
pub struct MenuPager {
    tree_provider: Arc<dyn MenuTreeProvider>,
    metadata: Arc<dyn LinkMetadataResolver>,
    ignore: IgnoreTargets,
    cache: Option<NavigationCache>,
}

impl MenuPager {
    pub(crate) fn new(
        tree_provider: Arc<dyn MenuTreeProvider>,
        metadata: Arc<dyn LinkMetadataResolver>,
        ignore: IgnoreTargets,
        cache: Option<NavigationCache>,
    ) -> Self {
        Self {
            tree_provider,
            metadata,
            ignore,
            cache,
        }
    }

    /// Previous and next links of `active` within its own menu.
    pub fn navigation(
        &self,
        active: &ActiveLink,
        restrict_to_parent: bool,
    ) -> Result<NavigationResult> {
        let key = NavigationKey::new(&active.menu_id, &active.id, restrict_to_parent);
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            trace!(menu = %active.menu_id, active = %active.id, "navigation cache hit");
            return Ok(hit);
        }

        let tree = self.tree_provider.load_tree(&active.menu_id)?;
        let flat = flatten(&tree, &self.ignore)?;
        let target_parent_id = active.parent.as_deref().and_then(|reference| self.metadata.resolve_parent_id(&active.menu_id, reference));
        let result = resolve_navigation(&flat, &active.id, target_parent_id.as_deref(), ResolutionOptions::restricted(restrict_to_parent));

        if let Some(cache) = &self.cache {
            cache.set(key, result.clone());
        }
        Ok(result)
    }

    /// Previous and next links of link `active_id` in menu `menu_id`.
    pub fn resolve_navigation(
        &self,
        menu_id: &str,
        active_id: &str,
        restrict_to_parent: bool,
    ) -> Result<NavigationResult> {
        let active = ActiveLink {
            id: active_id.to_string(),
            menu_id: menu_id.to_string(),
            parent: self.metadata.parent_reference(menu_id, active_id),
        };
        self.navigation(&active, restrict_to_parent)
    }

    /// Forget memoized results; call once the current request is done.
    pub fn end_request(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}
