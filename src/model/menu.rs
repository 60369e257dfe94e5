use serde::{Deserialize, Serialize};

use crate::{MenuPagerError, Result, model::MenuLinkModel};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuModel {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub links: Vec<MenuLinkModel>,
}

impl MenuModel {
    pub fn from_json(s: &str) -> Result<Self> {
        let menu = serde_json::from_str::<MenuModel>(s);
        match menu {
            Ok(v) => Ok(v),
            Err(e) => Err(MenuPagerError::Convert(format!("{}", e))),
        }
    }

    /// Config dependency name of this menu.
    pub fn config_dependency_name(&self) -> String {
        format!("system.menu.{}", self.id)
    }
}
