//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use pixelarte_core::{Cart, Product};

use crate::error::Result;
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// Format a price for display.
fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
            image: product.image.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Products in catalog order.
    pub products: Vec<ProductView>,
    /// Total items across the session cart.
    pub cart_count: u32,
    /// Item count of the last confirmed purchase, 0 when none.
    pub confirmed_count: u32,
}

/// Display the home page: the full catalog plus the cart badge count.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let products = state.catalog().load().await?;
    let cart: Cart = session
        .get(session_keys::CART)
        .await?
        .unwrap_or_default();
    let confirmed_count: u32 = session
        .get(session_keys::CONFIRMED_COUNT)
        .await?
        .unwrap_or(0);

    Ok(HomeTemplate {
        products: products.iter().map(ProductView::from).collect(),
        cart_count: cart.item_count(),
        confirmed_count,
    })
}
