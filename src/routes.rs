use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    catalog::{self, DishPatch, NewDish},
    error::AppError,
    state::AppState,
};

#[derive(Deserialize)]
pub struct SearchParams {
    name: Option<String>,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dishes", post(create_handler).get(list_handler))
        // Literal path registered ahead of the parametric one so search
        // is never shadowed by the id route.
        .route("/dishes/get", get(search_handler))
        .route(
            "/dishes/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .fallback(fallback_handler)
        .with_state(state)
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewDish>,
) -> Result<impl IntoResponse, AppError> {
    let dish = catalog::create(state.storage.as_ref(), payload)?;

    Ok((StatusCode::CREATED, Json(dish)))
}

pub async fn list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let dishes = catalog::list(state.storage.as_ref())?;

    Ok(Json(dishes))
}

pub async fn get_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    let dish = catalog::get_by_id(state.storage.as_ref(), id)?;

    Ok(Json(dish))
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(patch): Json<DishPatch>,
) -> Result<impl IntoResponse, AppError> {
    let dish = catalog::update(state.storage.as_ref(), id, patch)?;

    Ok(Json(dish))
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    let id = catalog::delete(state.storage.as_ref(), id)?;

    Ok(Json(json!({ "message": format!("Dish with id {id} deleted") })))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.name.unwrap_or_default();
    let matches = catalog::search_by_name(state.storage.as_ref(), &query)?;

    Ok(Json(matches))
}

pub async fn fallback_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "404 Not Found" })),
    )
}
