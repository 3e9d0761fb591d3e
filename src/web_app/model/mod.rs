// web_app/model/mod.rs - Shared data models for client and server
//
// These types travel between the catalog service, the server functions
// and the WASM client, so nothing here may depend on server-only crates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Route of the storefront itself
pub const HOME_PATH: &str = "/";

/// Route of the account page
pub const PROFILE_PATH: &str = "/profile";

/// Label shown instead of the description for out-of-stock products
pub const NOT_AVAILABLE_LABEL: &str = "Not Available";

/// Currency symbol prefixed to every price
pub const CURRENCY_SYMBOL: &str = "€";

/// Checkout route for a product id.
///
/// The id is not checked against the catalog.
pub fn checkout_path(id: i64) -> String {
    format!("/checkout/{}", id)
}

/// Product as served by the catalog service (`GET /products`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Currency-less decimal, transported as a string (`"10.00"`)
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Units in stock; zero means out of stock
    pub available: i64,
}

impl Product {
    /// Whether the product can be selected for checkout
    pub fn is_available(&self) -> bool {
        self.available > 0
    }

    /// Price with the fixed currency symbol, scale as served (`€10.00`)
    pub fn price_display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.price)
    }

    /// Description line of the card
    pub fn availability_text(&self) -> &str {
        if self.is_available() {
            &self.description
        } else {
            NOT_AVAILABLE_LABEL
        }
    }

    /// Where a click on this product leads, if anywhere
    pub fn checkout_route(&self) -> Option<String> {
        self.is_available().then(|| checkout_path(self.id))
    }

    /// Live search predicate: case-insensitive substring match on the name
    pub fn matches_search(&self, text: &str) -> bool {
        self.name.to_lowercase().contains(&text.to_lowercase())
    }
}

/// Normalization applied when the user explicitly commits a search
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Bottom navigation tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTab {
    #[default]
    Home,
    Orders,
    Account,
}

impl NavTab {
    pub const ALL: [NavTab; 3] = [NavTab::Home, NavTab::Orders, NavTab::Account];

    pub fn index(self) -> usize {
        match self {
            NavTab::Home => 0,
            NavTab::Orders => 1,
            NavTab::Account => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Orders => "Orders",
            NavTab::Account => "Account",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavTab::Home => "🏠",
            NavTab::Orders => "🛒",
            NavTab::Account => "👤",
        }
    }

    /// Route the tab navigates to.
    ///
    /// Orders has no page yet: selecting it only moves the highlight.
    pub fn route(self) -> Option<&'static str> {
        match self {
            NavTab::Home => Some(HOME_PATH),
            NavTab::Orders => None,
            NavTab::Account => Some(PROFILE_PATH),
        }
    }
}

impl std::fmt::Display for NavTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
