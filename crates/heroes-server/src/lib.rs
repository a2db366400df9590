//! # Heroes Server
//!
//! A small REST backend for the race resource, seeded from a JSON file. It
//! follows the conventions the admin client expects: `_start`/`_end` windows
//! on the collection and the collection size in `X-Total-Count`.

use axum::{Router, http::HeaderName, routing::get};
use configuration::ServerConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod store;

pub use store::{RaceStore, StoredRace};

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub store: RaceStore,
}

/// Builds the application routes around a loaded store.
pub fn router(store: RaceStore) -> Router {
    let app_state = Arc::new(AppState { store });
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(handlers::TOTAL_COUNT)]);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/races", get(handlers::list_races))
        .route("/races/{id}", get(handlers::get_race))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serves `store` on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, store: RaceStore) -> std::io::Result<()> {
    axum::serve(listener, router(store)).await
}

/// Loads the seed file and serves it on the configured address.
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let store = RaceStore::from_json_file(&config.seed_path)?;
    tracing::info!(races = store.len(), seed = %config.seed_path.display(), "Race store loaded.");

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Heroes server listening on http://{}", listener.local_addr()?);
    serve(listener, store).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use core_types::BaseAttributes;
    use serde_json::{Value, json};

    fn test_server() -> TestServer {
        let races = ["Human", "Elf", "Dwarf"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| StoredRace {
                id: i as u64 + 1,
                name: name.to_string(),
                description: format!("{name} description"),
                base_attributes: BaseAttributes {
                    strength: 5,
                    agility: 5,
                    intelligence: 5,
                    willpower: 5,
                },
            })
            .collect();
        TestServer::new(router(RaceStore::new(races).unwrap())).unwrap()
    }

    #[tokio::test]
    async fn lists_every_race_in_store_order() {
        let server = test_server();

        let response = server.get("/races").await;

        response.assert_status_ok();
        assert_eq!(response.header(handlers::TOTAL_COUNT), "3");
        let names: Vec<String> = response
            .json::<Vec<Value>>()
            .iter()
            .map(|race| race["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Human", "Elf", "Dwarf"]);
    }

    #[tokio::test]
    async fn honors_the_requested_window() {
        let server = test_server();

        let response = server
            .get("/races")
            .add_query_param("_start", 1)
            .add_query_param("_end", 2)
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(handlers::TOTAL_COUNT), "3");
        let races = response.json::<Vec<Value>>();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0]["id"], json!(2));
        assert_eq!(races[0]["base_attributes"]["strength"], json!(5));
    }

    #[tokio::test]
    async fn returns_one_race_by_id() {
        let server = test_server();

        let response = server.get("/races/2").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["name"], json!("Elf"));
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_bad_request() {
        let server = test_server();

        let response = server.get("/races/elf").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!("IDs should be numerical values. Invalid ID received: elf")
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let server = test_server();

        let response = server.get("/races/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({ "id": 42, "message": "Resource not found." })
        );
    }

    #[tokio::test]
    async fn health_check() {
        test_server().get("/health").await.assert_text("OK");
    }
}
