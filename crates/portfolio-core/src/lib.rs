pub mod background;
pub mod constants;
pub mod content;
pub mod filter;
pub mod profile;
pub mod seo;
pub mod specs;

pub use background::*;
pub use content::*;
pub use filter::*;
pub use profile::*;
pub use seo::*;
pub use specs::*;
