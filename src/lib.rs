//! # Menu Pager
//!
//! Previous and next links for the active entry of a navigation menu.
//!
//! The menu's link tree is flattened depth-first, pre-order, and the links
//! right before and after the active one become "previous" and "next". The
//! neighbours may come from a different branch of the tree; with
//! "restrict to parent" enabled, a neighbour is only kept if it shares the
//! active link's immediate parent.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use menu_pager::{MemMenuStore, MenuModel, MenuPagerBuilder, PagerBlock, PagerBlockConfig, PathActiveLinkLocator};
//!
//! let store = Arc::new(MemMenuStore::new());
//! store.register(MenuModel::from_json(json_str)?)?;
//!
//! let pager = MenuPagerBuilder::new().store(store.clone()).build()?;
//! let block = PagerBlock::new("main", PagerBlockConfig::default());
//!
//! let locator = PathActiveLinkLocator::new(store, "/docs/install");
//! if let Some(fragment) = block.build(&pager, &locator)? {
//!     println!("{}", fragment.to_html());
//! }
//! pager.end_request();
//! ```

mod builder;
mod common;
mod config;
mod error;
mod model;
mod navigation;
mod pager;
mod store;
mod tree;

use std::sync::{Arc, RwLock};

pub use builder::MenuPagerBuilder;
pub use common::{NavigationCache, NavigationKey};
pub use config::{Config, PagerConfig};
pub use error::MenuPagerError;
pub use model::*;
pub use navigation::{NavigationResult, ResolutionOptions, resolve_navigation};
pub use pager::*;
pub use store::{ActiveLink, ActiveLinkLocator, LinkMetadataResolver, MemMenuStore, MenuTreeProvider, PathActiveLinkLocator};
pub use tree::{FlatLink, IgnoreTargets, LinkId, MenuLinkNode, flatten};

/// Result type alias for menu pager operations.
pub type Result<T> = std::result::Result<T, MenuPagerError>;

/// Thread-safe shared lock wrapper using Arc<RwLock<T>>.
pub(crate) type ShareLock<T> = Arc<RwLock<T>>;
