//! In-memory menu store.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};

use petgraph::{
    Direction,
    algo::toposort,
    graph::{DiGraph, NodeIndex},
};
use tracing::{trace, warn};

use crate::{
    MenuPagerError, Result, ShareLock,
    model::{MenuLinkModel, MenuModel},
    store::{LinkMetadataResolver, MenuTreeProvider},
    tree::{LinkId, MenuLinkNode},
};

/// Registered menus, kept in registration order.
///
/// Trees are assembled on every [`MenuTreeProvider::load_tree`] call from the
/// flat link definitions of the menu:
/// - a link whose parent names no link of the same menu becomes top-level
/// - siblings are ordered by weight, then title, then id
/// - inaccessible links are dropped together with their subtree
#[derive(Debug, Clone)]
pub struct MemMenuStore {
    menus: ShareLock<Vec<MenuModel>>,
}

impl Default for MemMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemMenuStore {
    pub fn new() -> Self {
        Self {
            menus: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a menu, replacing any menu with the same id.
    pub fn register(
        &self,
        menu: MenuModel,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for link in &menu.links {
            if !seen.insert(link.id.as_str()) {
                return Err(MenuPagerError::Link(format!("duplicate link {} in menu {}", link.id, menu.id)));
            }
        }

        let mut menus = self.menus.write().unwrap();
        match menus.iter_mut().find(|m| m.id == menu.id) {
            Some(existing) => *existing = menu,
            None => menus.push(menu),
        }
        Ok(())
    }

    /// All registered menus.
    pub fn menus(&self) -> Vec<MenuModel> {
        self.menus.read().unwrap().clone()
    }

    pub fn menu(
        &self,
        id: &str,
    ) -> Option<MenuModel> {
        self.menus.read().unwrap().iter().find(|m| m.id == id).cloned()
    }

    /// Find a link of one menu. Link ids are only unique within a menu.
    pub fn find_link(
        &self,
        menu_id: &str,
        link_id: &str,
    ) -> Option<MenuLinkModel> {
        let menus = self.menus.read().unwrap();
        menus.iter().find(|m| m.id == menu_id).and_then(|menu| menu.links.iter().find(|l| l.id == link_id).cloned())
    }

    /// The first enabled, accessible link, in registration order, whose url is `path`.
    pub fn find_link_by_url(
        &self,
        path: &str,
    ) -> Option<(String, MenuLinkModel)> {
        let menus = self.menus.read().unwrap();
        menus
            .iter()
            .find_map(|menu| menu.links.iter().find(|l| l.enabled && l.accessible && l.url == path).map(|l| (menu.id.clone(), l.clone())))
    }
}

impl MenuTreeProvider for MemMenuStore {
    fn load_tree(
        &self,
        menu_id: &str,
    ) -> Result<Vec<MenuLinkNode>> {
        let menus = self.menus.read().unwrap();
        let menu = menus.iter().find(|m| m.id == menu_id).ok_or(MenuPagerError::Menu(menu_id.to_string()))?;

        let tree = build_tree(&menu.links)?;
        trace!(menu = menu_id, roots = tree.len(), "loaded menu tree");
        Ok(tree)
    }
}

impl LinkMetadataResolver for MemMenuStore {
    fn parent_reference(
        &self,
        menu_id: &str,
        link_id: &str,
    ) -> Option<String> {
        self.find_link(menu_id, link_id).and_then(|link| link.parent)
    }

    fn resolve_parent_id(
        &self,
        menu_id: &str,
        reference: &str,
    ) -> Option<LinkId> {
        self.find_link(menu_id, reference).map(|link| link.id)
    }
}

/// Assemble the link tree of one menu. Edges point from parent to child.
fn build_tree(links: &[MenuLinkModel]) -> Result<Vec<MenuLinkNode>> {
    let mut graph: DiGraph<&MenuLinkModel, ()> = DiGraph::new();
    let indices: HashMap<&str, NodeIndex> = links.iter().map(|l| (l.id.as_str(), graph.add_node(l))).collect();

    for link in links {
        let parent = link.parent.as_deref().and_then(|p| indices.get(p));
        if let (Some(parent), Some(child)) = (parent, indices.get(link.id.as_str())) {
            graph.add_edge(*parent, *child, ());
        }
    }

    if let Err(cycle) = toposort(&graph, None) {
        let link = graph[cycle.node_id()].id.clone();
        warn!(link = %link, "menu link parents form a cycle");
        return Err(MenuPagerError::TreeCycle {
            link,
        });
    }

    let mut roots: Vec<NodeIndex> = graph.node_indices().filter(|idx| graph.neighbors_directed(*idx, Direction::Incoming).next().is_none()).collect();
    sort_siblings(&graph, &mut roots);

    Ok(roots.into_iter().filter_map(|idx| build_node(&graph, idx, None)).collect())
}

fn build_node(
    graph: &DiGraph<&MenuLinkModel, ()>,
    idx: NodeIndex,
    parent_id: Option<&str>,
) -> Option<MenuLinkNode> {
    let link = graph[idx];
    if !link.accessible {
        return None;
    }

    let mut children: Vec<NodeIndex> = graph.neighbors_directed(idx, Direction::Outgoing).collect();
    sort_siblings(graph, &mut children);

    Some(MenuLinkNode {
        id: link.id.clone(),
        parent_id: parent_id.map(str::to_string),
        title: link.title.clone(),
        target: link.url.clone(),
        enabled: link.enabled,
        children: children.into_iter().filter_map(|child| build_node(graph, child, Some(link.id.as_str()))).collect(),
    })
}

fn sort_siblings(
    graph: &DiGraph<&MenuLinkModel, ()>,
    siblings: &mut [NodeIndex],
) {
    siblings.sort_by(|a, b| compare_links(graph[*a], graph[*b]));
}

fn compare_links(
    a: &MenuLinkModel,
    b: &MenuLinkModel,
) -> Ordering {
    a.weight.cmp(&b.weight).then_with(|| a.title.cmp(&b.title)).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(
        id: &str,
        parent: Option<&str>,
        weight: i32,
    ) -> MenuLinkModel {
        MenuLinkModel {
            id: id.to_string(),
            parent: parent.map(str::to_string),
            title: id.to_uppercase(),
            url: format!("/{}", id),
            enabled: true,
            accessible: true,
            weight,
        }
    }

    fn menu(links: Vec<MenuLinkModel>) -> MenuModel {
        MenuModel {
            id: "main".to_string(),
            label: "Main navigation".to_string(),
            description: String::new(),
            links,
        }
    }

    fn shape(nodes: &[MenuLinkNode]) -> String {
        nodes
            .iter()
            .map(|n| if n.has_children() { format!("{}[{}]", n.id, shape(&n.children)) } else { n.id.clone() })
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_load_tree_sorts_siblings() {
        let store = MemMenuStore::new();
        store
            .register(menu(vec![link("c", None, 0), link("a", None, 0), link("z", None, -5), link("y", Some("a"), 1), link("x", Some("a"), 1)]))
            .unwrap();

        let tree = store.load_tree("main").unwrap();
        assert_eq!(shape(&tree), "z,a[x,y],c");
        assert_eq!(tree[1].children[0].parent_id.as_deref(), Some("a"));
        assert_eq!(tree[1].children[0].target, "/x");
    }

    #[test]
    fn test_load_tree_orphans_become_top_level() {
        let store = MemMenuStore::new();
        store.register(menu(vec![link("a", None, 0), link("b", Some("gone"), 1)])).unwrap();

        let tree = store.load_tree("main").unwrap();
        assert_eq!(shape(&tree), "a,b");
        assert_eq!(tree[1].parent_id, None);
    }

    #[test]
    fn test_load_tree_prunes_inaccessible_subtrees() {
        let mut hidden = link("b", Some("a"), 0);
        hidden.accessible = false;
        let mut disabled = link("c", Some("a"), 1);
        disabled.enabled = false;

        let store = MemMenuStore::new();
        store.register(menu(vec![link("a", None, 0), hidden, link("x", Some("b"), 0), disabled, link("y", Some("c"), 0)])).unwrap();

        let tree = store.load_tree("main").unwrap();
        assert_eq!(shape(&tree), "a[c[y]]");
        assert!(!tree[0].children[0].enabled);
    }

    #[test]
    fn test_load_tree_detects_parent_cycle() {
        let store = MemMenuStore::new();
        store.register(menu(vec![link("root", None, 0), link("a", Some("b"), 0), link("b", Some("a"), 0)])).unwrap();

        let err = store.load_tree("main").unwrap_err();
        assert!(matches!(err, MenuPagerError::TreeCycle { .. }));
    }

    #[test]
    fn test_load_tree_unknown_menu() {
        let store = MemMenuStore::new();
        let err = store.load_tree("footer").unwrap_err();
        assert_eq!(err, MenuPagerError::Menu("footer".to_string()));
    }

    #[test]
    fn test_register_rejects_duplicate_links() {
        let store = MemMenuStore::new();
        let err = store.register(menu(vec![link("a", None, 0), link("a", None, 1)])).unwrap_err();
        assert!(matches!(err, MenuPagerError::Link(_)));
        assert!(store.menus().is_empty());
    }

    #[test]
    fn test_register_replaces_menu() {
        let store = MemMenuStore::new();
        store.register(menu(vec![link("a", None, 0)])).unwrap();
        store.register(menu(vec![link("b", None, 0)])).unwrap();

        assert_eq!(store.menus().len(), 1);
        assert_eq!(shape(&store.load_tree("main").unwrap()), "b");
    }

    #[test]
    fn test_link_metadata() {
        let store = MemMenuStore::new();
        store.register(menu(vec![link("a", None, 0), link("b", Some("a"), 0)])).unwrap();

        assert_eq!(store.parent_reference("main", "b").as_deref(), Some("a"));
        assert_eq!(store.parent_reference("main", "a"), None);
        assert_eq!(store.parent_reference("main", "missing"), None);
        assert_eq!(store.parent_reference("footer", "b"), None);
        assert_eq!(store.resolve_parent_id("main", "a").as_deref(), Some("a"));
        assert_eq!(store.resolve_parent_id("main", "missing"), None);
        assert_eq!(store.resolve_parent_id("footer", "a"), None);
    }

    #[test]
    fn test_link_metadata_is_scoped_to_menu() {
        let store = MemMenuStore::new();
        store.register(menu(vec![link("a", None, 0), link("b", Some("a"), 0)])).unwrap();
        let mut footer = menu(vec![link("p", None, 0), link("b", None, 1)]);
        footer.id = "footer".to_string();
        store.register(footer).unwrap();

        assert_eq!(store.parent_reference("main", "b").as_deref(), Some("a"));
        assert_eq!(store.parent_reference("footer", "b"), None);
        assert_eq!(store.find_link("footer", "b").map(|l| l.weight), Some(1));
    }
}
