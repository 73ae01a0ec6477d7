//! Admin route handlers for product CRUD.
//!
//! There is no authentication on these routes; that is an explicit scope
//! limitation of the project, not an oversight.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use pixelarte_core::{ProductDraft, ProductId};

use crate::error::{AppError, Result, product_not_found};
use crate::filters;
use crate::routes::home::ProductView;
use crate::state::AppState;

/// Form data for creating or editing a product.
///
/// Price arrives as text from the form and is parsed here; non-numeric
/// input is a validation error, not a panic.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl ProductForm {
    /// Parse and validate the submitted fields into a draft.
    fn into_draft(self) -> Result<ProductDraft> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("price must be a number".to_string()))?;
        Ok(ProductDraft::new(self.name, self.description, price, self.image)?)
    }
}

/// Admin listing template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/index.html")]
pub struct AdminIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Product form template (shared by create and edit).
#[derive(Template, WebTemplate)]
#[template(path = "admin/form.html")]
pub struct ProductFormTemplate {
    pub is_edit: bool,
    /// Form action URL (`/agregar` or `/editar/{id}`).
    pub action: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl ProductFormTemplate {
    fn empty() -> Self {
        Self {
            is_edit: false,
            action: "/agregar".to_string(),
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
        }
    }
}

/// List all products for management.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<AdminIndexTemplate> {
    let products = state.catalog().load().await?;
    Ok(AdminIndexTemplate {
        products: products.iter().map(ProductView::from).collect(),
    })
}

/// Show the create-product form.
#[instrument]
pub async fn new_product() -> ProductFormTemplate {
    ProductFormTemplate::empty()
}

/// Create a product from the submitted form and persist it.
///
/// The new product gets id = max existing id (default 0) + 1.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let draft = form.into_draft()?;
    let product = state.catalog().create(draft).await?;
    tracing::info!(id = %product.id, "Product created");

    Ok(Redirect::to("/admin"))
}

/// Show the edit form for an existing product.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<ProductFormTemplate> {
    let id = ProductId::new(id);
    let product = state.catalog().find(id).await?.ok_or_else(product_not_found)?;

    Ok(ProductFormTemplate {
        is_edit: true,
        action: format!("/editar/{id}"),
        name: product.name,
        description: product.description,
        price: product.price.to_string(),
        image: product.image,
    })
}

/// Overwrite a product's fields in place. The id never changes.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    // Resolve the product first: an unknown id is a 404 even when the
    // submitted fields would not validate either.
    state.catalog().find(id).await?.ok_or_else(product_not_found)?;

    let draft = form.into_draft()?;
    state
        .catalog()
        .update(id, draft)
        .await?
        .ok_or_else(product_not_found)?;
    tracing::info!(id = %id, "Product updated");

    Ok(Redirect::to("/admin"))
}

/// Delete a product. Deleting an absent id is a no-op.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<u32>) -> Result<Redirect> {
    state.catalog().delete(ProductId::new(id)).await?;
    tracing::info!(id, "Product deleted");

    Ok(Redirect::to("/admin"))
}
