//! Static portfolio content: the project catalog and lookups over it.

mod catalog;
mod category;
mod model;
mod store;

pub use catalog::*;
pub use category::*;
pub use model::*;
pub use store::*;
