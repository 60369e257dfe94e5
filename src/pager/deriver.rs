use serde::{Deserialize, Serialize};

use crate::{
    PagerConfig,
    model::MenuModel,
    pager::{PagerBlock, PagerBlockConfig},
};

/// Base id shared by all pager block variants.
pub const PAGER_BASE_ID: &str = "menu_pager_block";

/// One pager block variant, bound to one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerDefinition {
    /// `menu_pager_block:<menu id>`
    pub id: String,
    /// the menu id
    pub derivative_id: String,
    pub admin_label: String,
    pub category: String,
    /// config names the block depends on
    pub config_dependencies: Vec<String>,
}

/// Generates one pager definition per available menu.
pub struct PagerDeriver;

impl PagerDeriver {
    pub fn derive(menus: &[MenuModel]) -> Vec<PagerDefinition> {
        menus
            .iter()
            .map(|menu| PagerDefinition {
                id: format!("{}:{}", PAGER_BASE_ID, menu.id),
                derivative_id: menu.id.clone(),
                admin_label: format!("Menu Pager - {}", menu.label),
                category: "Menus".to_string(),
                config_dependencies: vec![menu.config_dependency_name()],
            })
            .collect()
    }

    /// One pager block per menu, configured with the pager defaults.
    pub fn blocks(
        menus: &[MenuModel],
        defaults: &PagerConfig,
    ) -> Vec<PagerBlock> {
        Self::derive(menus).iter().map(|definition| PagerBlock::from_definition(definition, PagerBlockConfig::from(defaults))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_derive_one_definition_per_menu() {
        let menus = vec![
            MenuModel {
                id: "main".to_string(),
                label: "Main navigation".to_string(),
                ..Default::default()
            },
            MenuModel {
                id: "footer".to_string(),
                label: "Footer".to_string(),
                ..Default::default()
            },
        ];

        let definitions = PagerDeriver::derive(&menus);
        assert_eq!(definitions.len(), 2);
        assert_eq!(
            definitions[0],
            PagerDefinition {
                id: "menu_pager_block:main".to_string(),
                derivative_id: "main".to_string(),
                admin_label: "Menu Pager - Main navigation".to_string(),
                category: "Menus".to_string(),
                config_dependencies: vec!["system.menu.main".to_string()],
            }
        );
        assert_eq!(definitions[1].id, "menu_pager_block:footer");
        assert!(PagerDeriver::derive(&[]).is_empty());
    }

    #[test]
    fn test_blocks_take_configured_default() {
        let menus = vec![MenuModel {
            id: "main".to_string(),
            label: "Main navigation".to_string(),
            ..Default::default()
        }];

        let config = Config::load_from_str("[pager]\nrestrict_to_parent = true").unwrap();
        let blocks = PagerDeriver::blocks(&menus, &config.pager);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].menu_id(), "main");
        assert!(blocks[0].config().restrict_to_parent);

        let blocks = PagerDeriver::blocks(&menus, &Config::default().pager);
        assert!(!blocks[0].config().restrict_to_parent);
    }
}
