use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::Form;
use serde::{Deserialize, Serialize};
use serde_json::json;

use petstore_types::{Ack, Pet, PetId, PetStatus};

use crate::auth::{identify, Action};
use crate::error::{ServerError, ServerResult};
use crate::params::{parse_status_list, parse_tag_list};
use crate::server::AppState;

/// Health check payload.
#[derive(Clone, Debug, Serialize)]
pub struct Health {
    pub status: String,
    pub version: String,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Query parameters for `findByStatus`.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// Query parameters for `findByTags`.
#[derive(Debug, Deserialize)]
pub struct TagsQuery {
    pub tags: String,
}

/// Form fields for the partial update endpoint.
#[derive(Debug, Deserialize)]
pub struct PetForm {
    pub name: Option<String>,
    pub status: Option<String>,
}

fn invalid_id(rejection: PathRejection) -> ServerError {
    ServerError::InvalidInput(rejection.body_text())
}

fn invalid_query(rejection: QueryRejection) -> ServerError {
    ServerError::InvalidInput(rejection.body_text())
}

fn invalid_payload(rejection: JsonRejection) -> ServerError {
    ServerError::InvalidPayload(rejection.body_text())
}

fn invalid_form(rejection: FormRejection) -> ServerError {
    ServerError::InvalidPayload(rejection.body_text())
}

/// Fetch a pet by id.
pub async fn get_pet_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
) -> ServerResult<Json<Pet>> {
    identify(state.auth.as_ref(), &headers, Action::ReadPets).await;
    let Path(id) = id.map_err(invalid_id)?;
    let id = PetId::new(id);
    match state.store.get(id)? {
        Some(pet) => Ok(Json(pet)),
        None => Err(ServerError::PetNotFound(id.to_string())),
    }
}

/// Delete a pet by id.
///
/// Deletion is idempotent: removing an id that is not present is a no-op
/// and still reports success.
pub async fn delete_pet_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
) -> ServerResult<StatusCode> {
    identify(state.auth.as_ref(), &headers, Action::WritePets).await;
    let Path(id) = id.map_err(invalid_id)?;
    let removed = state.store.delete(PetId::new(id))?;
    tracing::debug!("delete pet {}: removed={}", id, removed);
    Ok(StatusCode::OK)
}

/// Add a pet, replacing any existing record with the same id.
pub async fn add_pet_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    pet: Result<Json<Pet>, JsonRejection>,
) -> ServerResult<Json<Pet>> {
    identify(state.auth.as_ref(), &headers, Action::WritePets).await;
    let Json(pet) = pet.map_err(invalid_payload)?;
    let stored = state.store.insert(pet)?;
    Ok(Json(stored))
}

/// Update a pet. Same insert-or-replace as adding; there is no
/// pre-existence check.
pub async fn update_pet_handler(
    state: State<AppState>,
    headers: HeaderMap,
    pet: Result<Json<Pet>, JsonRejection>,
) -> ServerResult<Json<Pet>> {
    add_pet_handler(state, headers, pet).await
}

/// List pets whose status is in the given comma-separated set.
pub async fn find_by_status_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> ServerResult<Json<Vec<Pet>>> {
    identify(state.auth.as_ref(), &headers, Action::ReadPets).await;
    let Query(query) = query.map_err(invalid_query)?;
    let statuses = parse_status_list(&query.status)?;
    let pets = state.store.find_by_status(&statuses)?;
    Ok(Json(pets))
}

/// List pets whose tags intersect the given comma-separated set.
///
/// The published API marks this operation deprecated; it is served
/// normally.
pub async fn find_by_tags_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TagsQuery>, QueryRejection>,
) -> ServerResult<Json<Vec<Pet>>> {
    identify(state.auth.as_ref(), &headers, Action::ReadPets).await;
    let Query(query) = query.map_err(invalid_query)?;
    let tags = parse_tag_list(&query.tags)?;
    let pets = state.store.find_by_tags(&tags)?;
    Ok(Json(pets))
}

/// Overwrite the provided fields on an existing pet via form data.
///
/// A missing pet is a no-op; the response acknowledges success either way.
pub async fn update_pet_with_form_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<PetForm>, FormRejection>,
) -> ServerResult<Json<Ack>> {
    identify(state.auth.as_ref(), &headers, Action::WritePets).await;
    let Path(id) = id.map_err(invalid_id)?;
    let Form(form) = form.map_err(invalid_form)?;
    let status = form
        .status
        .as_deref()
        .map(PetStatus::parse)
        .transpose()
        .map_err(|e| ServerError::InvalidPayload(e.to_string()))?;

    if let Some(mut pet) = state.store.get(PetId::new(id))? {
        if let Some(name) = form.name {
            pet.name = name;
        }
        if let Some(status) = status {
            pet.status = status;
        }
        state.store.insert(pet)?;
    } else {
        tracing::debug!("form update for missing pet {} ignored", id);
    }
    Ok(Json(Ack::success()))
}

/// Health check handler.
pub async fn health_handler() -> Json<Health> {
    Json(Health::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let pet_count = state.store.len()?;
    Ok(Json(json!({
        "name": "petstore-server",
        "version": env!("CARGO_PKG_VERSION"),
        "pet_count": pet_count,
    })))
}
