//! Menu link trees and their flattened form.

mod flatten;
mod ignore;
mod node;

pub use flatten::{FlatLink, flatten};
pub use ignore::IgnoreTargets;
pub use node::{LinkId, MenuLinkNode};
