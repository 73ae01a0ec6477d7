//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Product listing + cart count
//! GET  /health                  - Health check
//!
//! # Cart
//! GET  /agregar_carrito/{id}    - Add product to cart (404 on unknown id)
//! GET  /carrito                 - Cart page with total
//! GET  /quitar_del_carrito/{id} - Remove product from cart
//! GET  /vaciar_carrito          - Clear the cart
//!
//! # Checkout
//! GET  /confirmar_compra        - Confirmation page (clears leftover cart)
//! POST /confirmar_compra        - Finalize purchase with submitted quantity
//!
//! # Admin (no authentication - explicit scope limitation)
//! GET  /admin                   - Product management listing
//! GET  /agregar                 - Create form
//! POST /agregar                 - Create product
//! GET  /editar/{id}             - Edit form
//! POST /editar/{id}             - Update product
//! POST /eliminar/{id}           - Delete product
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/agregar_carrito/{id}", get(cart::add))
        .route("/carrito", get(cart::show))
        .route("/quitar_del_carrito/{id}", get(cart::remove))
        .route("/vaciar_carrito", get(cart::clear))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route(
        "/confirmar_compra",
        get(checkout::show).post(checkout::confirm),
    )
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::index))
        .route("/agregar", get(admin::new_product).post(admin::create))
        .route("/editar/{id}", get(admin::edit).post(admin::update))
        .route("/eliminar/{id}", post(admin::delete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(cart_routes())
        .merge(checkout_routes())
        .merge(admin_routes())
}
