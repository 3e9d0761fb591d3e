// fixtures/catalogs/mod.rs
//
// Each sample catalog is a unit struct implementing TestCatalog.

pub mod apparel;

pub use apparel::{ApparelCatalog, ShirtAndHatCatalog};
