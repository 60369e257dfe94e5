mod link;
mod menu;

pub use link::MenuLinkModel;
pub use menu::MenuModel;
