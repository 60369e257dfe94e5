mod cache;

pub use cache::{NavigationCache, NavigationKey};
