//! Content discovery and page modeling.

pub mod front_matter;
pub mod loader;
pub mod page;
