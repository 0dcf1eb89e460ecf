//! Resource CRUD handlers, generic over the resource type: list, create, read, update, delete.

use crate::error::AppError;
use crate::resources::Resource;
use crate::response::{confirmed, created, Paginated};
use crate::service::{CrudService, Page, RequestValidator};
use crate::state::AppState;
use crate::sql::SqlValue;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Decode and validate a create/update body into values ordered as the writable columns.
fn payload_values<R: Resource>(body: Result<Json<Value>, JsonRejection>) -> Result<Vec<SqlValue>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if !body.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    let payload: R::Payload =
        serde_json::from_value(body).map_err(|e| AppError::Validation(format!("invalid payload: {}", e)))?;
    RequestValidator::validate(R::descriptor(), R::fields(payload))
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Value>>, AppError> {
    let d = R::descriptor();
    let filter = RequestValidator::filters(d, &params)?;
    let page = Page::from_query(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
    );
    let body = CrudService::list(state.gateway.as_ref(), d, &filter, page).await?;
    Ok(Json(body))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let d = R::descriptor();
    let values = payload_values::<R>(body)?;
    let id = CrudService::create(state.gateway.as_ref(), d, values).await?;
    tracing::info!(resource = d.path, id, "created");
    Ok(created(d.messages.created, id))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, AppError> {
    let d = R::descriptor();
    let id = parse_id(&id_str)?;
    let row = CrudService::read(state.gateway.as_ref(), d, id)
        .await?
        .ok_or_else(|| AppError::NotFound(d.messages.not_found.into()))?;
    Ok(Json(row))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let d = R::descriptor();
    let id = parse_id(&id_str)?;
    let values = payload_values::<R>(body)?;
    if !CrudService::update(state.gateway.as_ref(), d, id, values).await? {
        return Err(AppError::NotFound(d.messages.not_found.into()));
    }
    tracing::info!(resource = d.path, id, "updated");
    Ok(confirmed(d.messages.updated))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let d = R::descriptor();
    let id = parse_id(&id_str)?;
    if !CrudService::delete(state.gateway.as_ref(), d, id).await? {
        return Err(AppError::NotFound(d.messages.not_found.into()));
    }
    tracing::info!(resource = d.path, id, "deleted");
    Ok(confirmed(d.messages.deleted))
}
