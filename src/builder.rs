use std::sync::Arc;

use crate::{
    Config, MenuPager, MenuPagerError, Result,
    common::NavigationCache,
    store::{LinkMetadataResolver, MemMenuStore, MenuTreeProvider},
    tree::IgnoreTargets,
};

pub struct MenuPagerBuilder {
    tree_provider: Option<Arc<dyn MenuTreeProvider>>,
    metadata: Option<Arc<dyn LinkMetadataResolver>>,
    ignore: IgnoreTargets,
    cache_capacity: u64,
}

impl Default for MenuPagerBuilder {
    fn default() -> Self {
        Self {
            tree_provider: None,
            metadata: None,
            ignore: IgnoreTargets::default(),
            cache_capacity: 256,
        }
    }
}

impl MenuPagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a parsed [`Config`], compiling its ignore patterns.
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::new().ignore_targets(config.ignore_targets()?).cache_capacity(config.cache_capacity))
    }

    pub fn tree_provider(
        mut self,
        provider: Arc<dyn MenuTreeProvider>,
    ) -> Self {
        self.tree_provider = Some(provider);
        self
    }

    pub fn metadata_resolver(
        mut self,
        resolver: Arc<dyn LinkMetadataResolver>,
    ) -> Self {
        self.metadata = Some(resolver);
        self
    }

    /// Use one store as both tree provider and metadata resolver.
    pub fn store(
        self,
        store: Arc<MemMenuStore>,
    ) -> Self {
        self.tree_provider(store.clone()).metadata_resolver(store)
    }

    pub fn ignore_targets(
        mut self,
        ignore: IgnoreTargets,
    ) -> Self {
        self.ignore = ignore;
        self
    }

    /// 0 disables the navigation cache.
    pub fn cache_capacity(
        mut self,
        n: u64,
    ) -> Self {
        self.cache_capacity = n;
        self
    }

    pub fn build(&self) -> Result<MenuPager> {
        let tree_provider = self.tree_provider.clone().ok_or(MenuPagerError::Config("menu tree provider is required".to_string()))?;
        let metadata = self.metadata.clone().ok_or(MenuPagerError::Config("link metadata resolver is required".to_string()))?;
        let cache = (self.cache_capacity > 0).then(|| NavigationCache::new(self.cache_capacity));

        Ok(MenuPager::new(tree_provider, metadata, self.ignore.clone(), cache))
    }
}
