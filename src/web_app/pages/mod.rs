// web_app/pages/mod.rs - Page components module
//
// - HomePage: the storefront (search, product grid, bottom navigation)
// - CheckoutPage: destination of a product card click
// - ProfilePage: destination of the Account tab

pub mod checkout;
pub mod home;
pub mod profile;

pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use profile::ProfilePage;
