//! Cafe API Handlers

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Html,
};
use rand::Rng;
use serde::Deserialize;
use serde_json::{Value, json};

use super::form::AddCafeForm;
use crate::core::ServerState;
use crate::db::repository::cafe as cafe_repo;
use crate::utils::{AppError, AppResult, response_success};

/// GET / - static landing page; the API contract lives under the other routes
pub async fn home() -> Html<&'static str> {
    Html(
        "<html><head><title>Cafe API</title></head>\
         <body><h1>Cafe &amp; Wifi API</h1>\
         <p>See /all, /random and /search?loc=...</p></body></html>",
    )
}

/// GET /random - one uniformly chosen cafe
pub async fn random(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let cafes = cafe_repo::find_all(&state.db.pool).await?;
    if cafes.is_empty() {
        return Err(AppError::NotFound("No cafes in the database".into()));
    }
    let idx = rand::thread_rng().gen_range(0..cafes.len());
    Ok(Json(json!({ "cafe": cafes[idx] })))
}

/// GET /all - every cafe as a bare list (empty list is valid)
pub async fn all(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let cafes = cafe_repo::find_all(&state.db.pool).await?;
    Ok(Json(json!(cafes)))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

/// GET /search?loc=X - cafes whose location exactly equals X
///
/// A miss answers 200 with the error envelope, not 404. Longstanding
/// client-visible behavior; do not elevate the status.
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    let loc = query.loc.unwrap_or_default();
    let cafes = cafe_repo::find_by_location(&state.db.pool, &loc).await?;
    if cafes.is_empty() {
        return Ok(Json(
            json!({ "error": { "Not Found": "No cafes at this location" } }),
        ));
    }
    Ok(Json(json!({ "cafes": cafes })))
}

/// POST /add - add a cafe from an urlencoded form
pub async fn add(
    State(state): State<ServerState>,
    Form(form): Form<AddCafeForm>,
) -> AppResult<Json<Value>> {
    let new_cafe = form.into_create()?;

    // Duplicate check on the (name, location) pair; the unique index in the
    // schema backstops concurrent adds that slip past this read.
    let existing = cafe_repo::find_by_name_and_location(
        &state.db.pool,
        &new_cafe.name,
        &new_cafe.location,
    )
    .await?;
    if !existing.is_empty() {
        return Err(AppError::AlreadyExists);
    }

    let id = cafe_repo::insert(&state.db.pool, new_cafe).await?;
    tracing::info!(id, "Cafe added");
    Ok(response_success("Successfully added the new cafe."))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    pub new_price: Option<String>,
}

/// PATCH /update-price/{id}?new_price=P - set coffee_price
///
/// An absent new_price clears the price to NULL, matching what clients
/// have always gotten from this route.
pub async fn update_price(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdatePriceQuery>,
) -> AppResult<Json<Value>> {
    let updated =
        cafe_repo::update_price(&state.db.pool, id, query.new_price.as_deref()).await?;
    if !updated {
        return Err(AppError::NotFound(
            "Sorry a cafe with that id was not found in the database.".into(),
        ));
    }
    Ok(response_success("Successfully added the new coffee price."))
}

#[derive(Debug, Deserialize)]
pub struct ReportClosedQuery {
    pub api_key: Option<String>,
}

/// DELETE /report-closed/{id}?api_key=K - delete a cafe
///
/// The key is checked before existence: a wrong key on a nonexistent id
/// still answers 403, never 404.
pub async fn report_closed(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ReportClosedQuery>,
) -> AppResult<Json<Value>> {
    if query.api_key.as_deref() != Some(state.config.api_key.as_str()) {
        return Err(AppError::Forbidden);
    }

    let deleted = cafe_repo::delete(&state.db.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("No cafe with this id".into()));
    }

    tracing::info!(id, "Cafe deleted");
    Ok(response_success("Successfully deleted cafe object"))
}
