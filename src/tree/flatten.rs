//! Depth-first flattening of a menu link tree.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{
    MenuPagerError, Result,
    tree::{IgnoreTargets, LinkId, MenuLinkNode},
};

/// A menu link projected into the flat, pre-order sequence of its whole menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatLink {
    pub id: LinkId,
    /// id of the link this one was reached through during traversal
    pub parent_id: Option<LinkId>,
    pub title: String,
    pub target: String,
}

/// Flatten `tree` in depth-first pre-order.
///
/// Disabled links and links whose target is in `ignore` are left out, but
/// their children are still visited. Each emitted link records the id of the
/// node it was traversed under, whatever its own `parent_id` says.
///
/// Returns [`MenuPagerError::TreeCycle`] if a link id shows up again below
/// itself.
pub fn flatten(
    tree: &[MenuLinkNode],
    ignore: &IgnoreTargets,
) -> Result<Vec<FlatLink>> {
    let mut flat = Vec::new();
    let mut ancestors = Vec::new();
    flatten_into(tree, ignore, None, &mut ancestors, &mut flat)?;

    trace!(count = flat.len(), "flattened menu tree");
    Ok(flat)
}

fn flatten_into<'a>(
    nodes: &'a [MenuLinkNode],
    ignore: &IgnoreTargets,
    parent_id: Option<&'a str>,
    ancestors: &mut Vec<&'a str>,
    flat: &mut Vec<FlatLink>,
) -> Result<()> {
    for node in nodes {
        if ancestors.contains(&node.id.as_str()) {
            warn!(link = %node.id, "menu link found below itself, aborting flatten");
            return Err(MenuPagerError::TreeCycle {
                link: node.id.clone(),
            });
        }

        if node.enabled && !ignore.contains(&node.target) {
            flat.push(FlatLink {
                id: node.id.clone(),
                parent_id: parent_id.map(str::to_string),
                title: node.title.clone(),
                target: node.target.clone(),
            });
        }

        if node.has_children() {
            ancestors.push(node.id.as_str());
            flatten_into(&node.children, ignore, Some(node.id.as_str()), ancestors, flat)?;
            ancestors.pop();
        }
    }

    Ok(())
}
