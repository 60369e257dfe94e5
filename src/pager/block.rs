//! Pager block bound to one menu.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::{
    MenuPagerError, PagerConfig, Result,
    pager::{MenuPager, PagerDefinition, PagerFragment},
    store::ActiveLinkLocator,
};

/// Results depend on the active link, which depends on the request path.
pub const URL_PATH_CACHE_CONTEXT: &str = "url.path";

const RESTRICT_TO_PARENT_KEY: &str = "menu_pager_restrict_to_parent";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerBlockConfig {
    /// only use previous and next links with the same parent as the active link
    #[serde(rename = "menu_pager_restrict_to_parent", default)]
    pub restrict_to_parent: bool,
}

impl From<&PagerConfig> for PagerBlockConfig {
    fn from(config: &PagerConfig) -> Self {
        Self {
            restrict_to_parent: config.restrict_to_parent,
        }
    }
}

/// A configured pager for one menu.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerBlock {
    menu_id: String,
    config: PagerBlockConfig,
}

impl PagerBlock {
    pub fn new(
        menu_id: impl Into<String>,
        config: PagerBlockConfig,
    ) -> Self {
        Self {
            menu_id: menu_id.into(),
            config,
        }
    }

    pub fn from_definition(
        definition: &PagerDefinition,
        config: PagerBlockConfig,
    ) -> Self {
        Self::new(definition.derivative_id.clone(), config)
    }

    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    pub fn config(&self) -> &PagerBlockConfig {
        &self.config
    }

    /// Render the pager for the current request.
    ///
    /// Renders nothing unless the active link belongs to this block's menu and
    /// has a previous or a next link.
    pub fn build(
        &self,
        pager: &MenuPager,
        locator: &dyn ActiveLinkLocator,
    ) -> Result<Option<PagerFragment>> {
        let Some(active) = locator.active_link() else {
            return Ok(None);
        };
        if active.menu_id != self.menu_id {
            trace!(menu = %self.menu_id, active_menu = %active.menu_id, "active link belongs to another menu");
            return Ok(None);
        }

        let navigation = pager.navigation(&active, self.config.restrict_to_parent)?;
        Ok(PagerFragment::from_navigation(&navigation))
    }

    /// Apply submitted settings form values.
    ///
    /// The checkbox may arrive as a bool, a number or a string; a missing
    /// value unchecks it.
    pub fn submit(
        &mut self,
        values: &JsonValue,
    ) -> Result<()> {
        self.config.restrict_to_parent = match values.get(RESTRICT_TO_PARENT_KEY) {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(JsonValue::String(s)) => !s.is_empty() && s != "0",
            Some(other) => {
                return Err(MenuPagerError::Config(format!("invalid value for {}: {}", RESTRICT_TO_PARENT_KEY, other)));
            }
        };
        Ok(())
    }

    /// `parent_contexts` merged with the request path context.
    pub fn cache_contexts<S: AsRef<str>>(
        &self,
        parent_contexts: &[S],
    ) -> Vec<String> {
        merge_cache_contexts(parent_contexts, &[URL_PATH_CACHE_CONTEXT])
    }
}

/// Union of two cache context lists, sorted and without duplicates.
pub fn merge_cache_contexts<A: AsRef<str>, B: AsRef<str>>(
    a: &[A],
    b: &[B],
) -> Vec<String> {
    let mut contexts: Vec<String> = a.iter().map(|c| c.as_ref().to_string()).chain(b.iter().map(|c| c.as_ref().to_string())).collect();
    contexts.sort();
    contexts.dedup();
    contexts
}
