use std::sync::Arc;

use menu_pager::{Config, MemMenuStore, MenuModel, MenuPagerBuilder, PagerDeriver, PathActiveLinkLocator};

fn main() {
    let config = Config::load_from_str(
        r#"
        cache_capacity = 64
        [pager]
        restrict_to_parent = false
        "#,
    )
    .unwrap();

    let store = Arc::new(MemMenuStore::new());
    store.register(MenuModel::from_json(include_str!("./menu.json")).unwrap()).unwrap();

    let pager = MenuPagerBuilder::with_config(&config).unwrap().store(store.clone()).build().unwrap();

    for definition in PagerDeriver::derive(&store.menus()) {
        println!("Block: {} ({})", definition.admin_label, definition.id);
    }

    for mut block in PagerDeriver::blocks(&store.menus(), &config.pager) {
        for checked in [false, true] {
            block.submit(&serde_json::json!({ "menu_pager_restrict_to_parent": checked })).unwrap();
            let restrict_to_parent = block.config().restrict_to_parent;

            for path in ["/docs", "/docs/install", "/docs/install/macos", "/docs/configure", "/faq"] {
                let locator = PathActiveLinkLocator::new(store.clone(), path);
                match block.build(&pager, &locator).unwrap() {
                    Some(fragment) => println!("  [{} restrict={}] {}: {}", block.menu_id(), restrict_to_parent, path, fragment.to_html()),
                    None => println!("  [{} restrict={}] {}: (no pager)", block.menu_id(), restrict_to_parent, path),
                }
            }
            println!("  cache contexts: {:?}", block.cache_contexts::<&str>(&[]));
            pager.end_request();
        }
    }
}
