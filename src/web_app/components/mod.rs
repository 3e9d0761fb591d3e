// web_app/components/mod.rs - UI components module
//
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, etc.)
// - search.rs: Search bar
// - product.rs: Product cards and grid
// - navigation.rs: Bottom tab bar

pub mod common;
pub mod navigation;
pub mod product;
pub mod search;

pub use common::*;
pub use navigation::*;
pub use product::*;
pub use search::*;
