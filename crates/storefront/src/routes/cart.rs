//! Cart route handlers.
//!
//! The cart is stored whole in the visitor's session. Every mutation loads
//! it from the session, applies the change through `pixelarte_core::Cart`,
//! and writes it back, then redirects the browser.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;

use pixelarte_core::{Cart, CartEntry, ProductId};

use crate::error::{Result, product_not_found};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

/// Format a price for display.
fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            total: format_price(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.product.id.as_u32(),
            name: entry.product.name.clone(),
            image: entry.product.image.clone(),
            quantity: entry.quantity,
            price: format_price(entry.product.price),
            line_price: format_price(entry.line_total()),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, defaulting to an empty one.
pub(crate) async fn get_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(session_keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
pub(crate) async fn set_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Add a product to the cart by id, then return to the shop.
///
/// Unknown ids are a 404; the product fields are snapshotted into the cart
/// at add time, so later catalog edits do not touch existing lines.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u32>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    let product = state.catalog().find(id).await?.ok_or_else(product_not_found)?;

    let mut cart = get_cart(&session).await?;
    cart.add(product);
    set_cart(&session, &cart).await?;

    Ok(Redirect::to("/"))
}

/// Display the cart page with per-line and overall totals.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let cart = get_cart(&session).await?;
    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Remove a product from the cart. Removing an absent id is a no-op.
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<u32>) -> Result<Redirect> {
    let mut cart = get_cart(&session).await?;
    cart.remove(ProductId::new(id));
    set_cart(&session, &cart).await?;

    Ok(Redirect::to("/carrito"))
}

/// Empty the cart unconditionally.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect> {
    let mut cart = get_cart(&session).await?;
    cart.clear();
    set_cart(&session, &cart).await?;

    Ok(Redirect::to("/carrito"))
}
