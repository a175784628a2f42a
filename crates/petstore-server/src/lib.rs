//! HTTP server for the pet store.
//!
//! Serves the classic pet resource over REST: CRUD by id, status and tag
//! filters, and form-based partial updates, all backed by a pluggable
//! [`PetStore`](petstore_store::PetStore).

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod params;
pub mod router;
pub mod server;

pub use auth::{Action, AllowAllAuth, AuthProvider, Credentials, Identity};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{AppState, PetServer};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::json;
    use tower::util::ServiceExt;

    use petstore_store::InMemoryPetStore;

    fn seeded_state() -> AppState {
        AppState {
            store: Arc::new(InMemoryPetStore::with_seed_data()),
            auth: Arc::new(AllowAllAuth),
        }
    }

    async fn send(state: &AppState, request: Request<Body>) -> axum::response::Response {
        router::build_router(state.clone())
            .oneshot(request)
            .await
            .unwrap()
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, value: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ids(value: &serde_json::Value) -> Vec<i64> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/health")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint_reports_pet_count() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/info")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(body["name"], "petstore-server");
        assert_eq!(body["pet_count"], 7);
    }

    #[tokio::test]
    async fn get_pet_returns_record() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/1")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Rex");
        assert_eq!(body["status"], "available");
    }

    #[tokio::test]
    async fn get_missing_pet_is_not_found() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/99")).await;
        assert_eq!(response.status(), 404);

        let body = body_json(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], "pet not found: 99");
    }

    #[tokio::test]
    async fn get_pet_rejects_non_numeric_id() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/not-a-number")).await;
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn add_pet_round_trips() {
        let state = seeded_state();
        let pet = json!({
            "id": 100,
            "name": "Ziggy",
            "status": "available",
            "tags": ["new"],
            "category": "iguanas",
        });

        let response = send(&state, json_request("POST", "/pet", pet.clone())).await;
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await, pet);

        let response = send(&state, request("GET", "/pet/100")).await;
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await["category"], "iguanas");
    }

    #[tokio::test]
    async fn add_pet_rejects_malformed_body() {
        let state = seeded_state();
        let request = Request::builder()
            .method("POST")
            .uri("/pet")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = send(&state, request).await;
        assert_eq!(response.status(), 405);
    }

    #[tokio::test]
    async fn add_pet_rejects_missing_id() {
        let state = seeded_state();
        let body = json!({"name": "NoId", "status": "available"});

        let response = send(&state, json_request("POST", "/pet", body)).await;
        assert_eq!(response.status(), 405);
    }

    #[tokio::test]
    async fn update_pet_replaces_record() {
        let state = seeded_state();
        let updated = json!({"id": 1, "name": "Rex II", "status": "sold"});

        let response = send(&state, json_request("PUT", "/pet", updated)).await;
        assert_eq!(response.status(), 200);

        let body = body_json(send(&state, request("GET", "/pet/1")).await).await;
        assert_eq!(body["name"], "Rex II");
        assert_eq!(body["status"], "sold");
    }

    #[tokio::test]
    async fn update_pet_inserts_when_missing() {
        let state = seeded_state();
        let pet = json!({"id": 200, "name": "Newcomer", "status": "pending"});

        let response = send(&state, json_request("PUT", "/pet", pet)).await;
        assert_eq!(response.status(), 200);

        let response = send(&state, request("GET", "/pet/200")).await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn delete_pet_then_get_is_not_found() {
        let state = seeded_state();
        let response = send(&state, request("DELETE", "/pet/2")).await;
        assert_eq!(response.status(), 200);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());

        let response = send(&state, request("GET", "/pet/2")).await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn delete_missing_pet_still_succeeds() {
        let state = seeded_state();
        let response = send(&state, request("DELETE", "/pet/999")).await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn delete_accepts_api_key_header() {
        let state = seeded_state();
        let request = Request::builder()
            .method("DELETE")
            .uri("/pet/3")
            .header("api_key", "special-key")
            .body(Body::empty())
            .unwrap();

        let response = send(&state, request).await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn find_by_status_filters() {
        let state = seeded_state();
        let response =
            send(&state, request("GET", "/pet/findByStatus?status=available,sold")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(ids(&body), vec![1, 2, 4, 6, 7]);
    }

    #[tokio::test]
    async fn find_by_status_rejects_unknown_value() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/findByStatus?status=adopted")).await;
        assert_eq!(response.status(), 400);

        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn find_by_status_requires_param() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/findByStatus")).await;
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn find_by_tags_intersects() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/findByTags?tags=trained,quiet")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(ids(&body), vec![1, 3, 4, 5]);
    }

    #[tokio::test]
    async fn find_by_tags_trims_encoded_spaces() {
        let state = seeded_state();
        let response =
            send(&state, request("GET", "/pet/findByTags?tags=trained,%20quiet")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(ids(&body), vec![1, 3, 4, 5]);
    }

    #[tokio::test]
    async fn find_by_tags_rejects_empty_list() {
        let state = seeded_state();
        let response = send(&state, request("GET", "/pet/findByTags?tags=")).await;
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn form_update_renames_without_touching_status() {
        let state = seeded_state();
        let response = send(&state, form_request("/pet/1", "name=Rexy")).await;
        assert_eq!(response.status(), 200);

        let ack = body_json(response).await;
        assert_eq!(ack["code"], 200);
        assert_eq!(ack["message"], "SUCCESS");

        let body = body_json(send(&state, request("GET", "/pet/1")).await).await;
        assert_eq!(body["name"], "Rexy");
        assert_eq!(body["status"], "available");
    }

    #[tokio::test]
    async fn form_update_changes_status_only() {
        let state = seeded_state();
        let response = send(&state, form_request("/pet/2", "status=sold")).await;
        assert_eq!(response.status(), 200);

        let body = body_json(send(&state, request("GET", "/pet/2")).await).await;
        assert_eq!(body["name"], "Mittens");
        assert_eq!(body["status"], "sold");
    }

    #[tokio::test]
    async fn form_update_on_missing_pet_still_acks() {
        let state = seeded_state();
        let response = send(&state, form_request("/pet/555", "name=Ghost")).await;
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await["message"], "SUCCESS");

        let response = send(&state, request("GET", "/pet/555")).await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn form_update_rejects_unknown_status() {
        let state = seeded_state();
        let response = send(&state, form_request("/pet/1", "status=adopted")).await;
        assert_eq!(response.status(), 405);
    }

    #[tokio::test]
    async fn form_update_rejects_wrong_content_type() {
        let state = seeded_state();
        let request = Request::builder()
            .method("POST")
            .uri("/pet/1")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\":\"Rexy\"}"))
            .unwrap();

        let response = send(&state, request).await;
        assert_eq!(response.status(), 405);
    }
}
