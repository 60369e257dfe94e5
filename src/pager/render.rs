//! Pager markup.

use htmlescape::encode_minimal;
use serde::Serialize;

use crate::{navigation::NavigationResult, tree::FlatLink};

/// Library attached to every rendered pager.
pub const PAGER_LIBRARY: &str = "menu_pager/menu_pager";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PagerDirection {
    Previous,
    Next,
}

impl PagerDirection {
    /// Class of the item wrapper.
    pub fn class(&self) -> &'static str {
        match self {
            PagerDirection::Previous => "menu-pager-previous",
            PagerDirection::Next => "menu-pager-next",
        }
    }

    /// Link text for a link titled `title`.
    pub fn label(
        &self,
        title: &str,
    ) -> String {
        match self {
            PagerDirection::Previous => format!("<< {}", title),
            PagerDirection::Next => format!("{} >>", title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerItem {
    pub key: PagerDirection,
    pub label: String,
    pub url: String,
    pub wrapper_class: &'static str,
}

impl PagerItem {
    fn new(
        key: PagerDirection,
        link: &FlatLink,
    ) -> Self {
        Self {
            key,
            label: key.label(&link.title),
            url: link.target.clone(),
            wrapper_class: key.class(),
        }
    }
}

/// A rendered pager: an item list of at most a previous and a next link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerFragment {
    pub items: Vec<PagerItem>,
    pub classes: Vec<&'static str>,
    pub library: &'static str,
}

impl PagerFragment {
    /// `None` when there is neither a previous nor a next link.
    pub fn from_navigation(navigation: &NavigationResult) -> Option<Self> {
        let items: Vec<PagerItem> = [(PagerDirection::Previous, &navigation.previous), (PagerDirection::Next, &navigation.next)]
            .into_iter()
            .filter_map(|(key, link)| link.as_ref().map(|l| PagerItem::new(key, l)))
            .collect();

        if items.is_empty() {
            return None;
        }

        Some(Self {
            items,
            classes: vec!["menu-pager", "clearfix"],
            library: PAGER_LIBRARY,
        })
    }

    pub fn item(
        &self,
        key: PagerDirection,
    ) -> Option<&PagerItem> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<div class=\"item-list\"><ul class=\"{}\">", encode_minimal(&self.classes.join(" ")));
        for item in &self.items {
            html.push_str(&format!(
                "<li class=\"{}\"><a href=\"{}\">{}</a></li>",
                item.wrapper_class,
                encode_minimal(&item.url),
                encode_minimal(&item.label)
            ));
        }
        html.push_str("</ul></div>");
        html
    }
}
