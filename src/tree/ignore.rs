//! Link targets excluded from flattening.

use std::collections::HashSet;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::Result;

/// Set of link targets that never take part in navigation.
///
/// Exact targets are inserted with [`IgnoreTargets::insert`]; glob patterns
/// (e.g. `/admin/*`) come from configuration. The default set is empty.
#[derive(Debug, Clone, Default)]
pub struct IgnoreTargets {
    exact: HashSet<String>,
    globs: Option<GlobSet>,
}

impl IgnoreTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a list of glob patterns.
    pub fn with_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern.as_ref())?);
        }

        Ok(Self {
            exact: HashSet::new(),
            globs: Some(builder.build()?),
        })
    }

    /// Ignore one target verbatim.
    pub fn insert(
        &mut self,
        target: impl Into<String>,
    ) {
        self.exact.insert(target.into());
    }

    pub fn contains(
        &self,
        target: &str,
    ) -> bool {
        self.exact.contains(target) || self.globs.as_ref().is_some_and(|g| g.is_match(target))
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.globs.as_ref().is_none_or(|g| g.is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreTargets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut targets = Self::default();
        for target in iter {
            targets.insert(target);
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuPagerError;

    #[test]
    fn test_exact_targets_keep_query_strings_literal() {
        let ignore: IgnoreTargets = ["/search?q=a"].into_iter().collect();
        assert!(ignore.contains("/search?q=a"));
        assert!(!ignore.contains("/search?q=b"));
    }

    #[test]
    fn test_glob_targets() {
        let ignore = IgnoreTargets::with_patterns(&["/admin/**", "*.pdf"]).unwrap();
        assert!(ignore.contains("/admin/config/system"));
        assert!(ignore.contains("/files/report.pdf"));
        assert!(!ignore.contains("/about"));
        assert!(!ignore.is_empty());
    }

    #[test]
    fn test_invalid_glob() {
        let err = IgnoreTargets::with_patterns(&["/admin/[unclosed"]).unwrap_err();
        assert!(matches!(err, MenuPagerError::Pattern(_)));
    }

    #[test]
    fn test_default_is_empty() {
        let ignore = IgnoreTargets::default();
        assert!(ignore.is_empty());
        assert!(!ignore.contains(""));
    }
}
