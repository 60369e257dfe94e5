//! Previous/next resolution over a flattened menu.
//!
//! Adjacency is taken from the flat sequence of the *whole* menu, so the
//! neighbours of a link may sit in another branch of the tree. The optional
//! parent restriction is applied afterwards, as a filter on those two
//! neighbours; it never widens the search.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tree::FlatLink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionOptions {
    /// Only accept neighbours sharing the active link's immediate parent.
    pub restrict_to_parent: bool,
}

impl ResolutionOptions {
    pub fn restricted(restrict_to_parent: bool) -> Self {
        Self {
            restrict_to_parent,
        }
    }
}

/// Previous and next links of one active link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<FlatLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<FlatLink>,
}

impl NavigationResult {
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Find the neighbours of `active_id` in `flat`.
///
/// `target_parent_id` is the resolved parent of the active link; it is only
/// consulted when `options.restrict_to_parent` is set, in which case a
/// neighbour is kept only if its `parent_id` equals it. An active link that is
/// not in `flat` yields an empty result.
pub fn resolve_navigation(
    flat: &[FlatLink],
    active_id: &str,
    target_parent_id: Option<&str>,
    options: ResolutionOptions,
) -> NavigationResult {
    let Some(index) = flat.iter().position(|link| link.id == active_id) else {
        debug!(active = active_id, "active link not in flattened menu");
        return NavigationResult::default();
    };

    let previous = index.checked_sub(1).and_then(|i| flat.get(i));
    let next = flat.get(index + 1);

    let accept = |candidate: &&FlatLink| !options.restrict_to_parent || candidate.parent_id.as_deref() == target_parent_id;

    let result = NavigationResult {
        previous: previous.filter(accept).cloned(),
        next: next.filter(accept).cloned(),
    };

    debug!(
        active = active_id,
        previous = result.previous.as_ref().map(|l| l.id.as_str()),
        next = result.next.as_ref().map(|l| l.id.as_str()),
        restrict_to_parent = options.restrict_to_parent,
        "resolved menu navigation"
    );

    result
}
