use std::{fs, path::Path};

use serde::Deserialize;

use crate::{IgnoreTargets, MenuPagerError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// pager defaults
    pub pager: PagerConfig,
    /// navigation cache entries held per request, 0 disables caching, defaults to 256
    pub cache_capacity: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// default value of the "restrict to parent" setting for new pager blocks
    pub restrict_to_parent: bool,
    /// glob patterns of link targets that never appear as previous or next
    pub ignore_targets: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pager: PagerConfig::default(),
            cache_capacity: 256,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(|e| MenuPagerError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), e)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        Ok(config)
    }

    /// Compile the configured ignore patterns.
    pub fn ignore_targets(&self) -> Result<IgnoreTargets> {
        IgnoreTargets::with_patterns(&self.pager.ignore_targets)
    }
}

#[cfg(test)]
mod test {
    use crate::{Config, MenuPagerError};

    #[test]
    fn test_config_deserialize() {
        let toml_str = r#"
        cache_capacity = 10
        [pager]
        restrict_to_parent = true
        ignore_targets = ["/admin/*", "/user/login"]
        "#;
        let config = Config::load_from_str(toml_str).unwrap();
        assert_eq!(config.cache_capacity, 10);
        assert!(config.pager.restrict_to_parent);
        assert_eq!(config.pager.ignore_targets, vec!["/admin/*", "/user/login"]);

        let ignore = config.ignore_targets().unwrap();
        assert!(ignore.contains("/admin/people"));
        assert!(ignore.contains("/user/login"));
        assert!(!ignore.contains("/about"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.cache_capacity, 256);
        assert!(!config.pager.restrict_to_parent);
        assert!(config.ignore_targets().unwrap().is_empty());
    }

    #[test]
    fn test_config_invalid() {
        let err = Config::load_from_str("cache_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, MenuPagerError::Config(_)));

        let err = Config::create("/nonexistent/menu-pager.toml").unwrap_err();
        assert!(matches!(err, MenuPagerError::Config(_)));
    }
}
