use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::server::AppState;

/// HTTP endpoint paths for the pet store API.
pub mod endpoints {
    pub const PET: &str = "/pet";
    pub const PET_BY_ID: &str = "/pet/:pet_id";
    pub const FIND_BY_STATUS: &str = "/pet/findByStatus";
    pub const FIND_BY_TAGS: &str = "/pet/findByTags";
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
}

/// Build the axum router with all pet store endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::PET,
            post(handler::add_pet_handler).put(handler::update_pet_handler),
        )
        .route(
            endpoints::FIND_BY_STATUS,
            get(handler::find_by_status_handler),
        )
        .route(endpoints::FIND_BY_TAGS, get(handler::find_by_tags_handler))
        .route(
            endpoints::PET_BY_ID,
            get(handler::get_pet_handler)
                .delete(handler::delete_pet_handler)
                .post(handler::update_pet_with_form_handler),
        )
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
