use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{hld1s, middleware::AppState, ohlds};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Holiday header (OHLD) routes
        .route("/api/Ohlds", get(ohlds::list_headers))
        .route("/api/Ohlds", post(ohlds::create_header))
        .route("/api/Ohlds/:code", get(ohlds::get_header))
        .route("/api/Ohlds/:code", put(ohlds::replace_header))
        .route("/api/Ohlds/:code", delete(ohlds::delete_header))
        // Holiday range (HLD1) routes
        .route("/api/Hld1s", get(hld1s::list_ranges))
        .route("/api/Hld1s", post(hld1s::create_range))
        .route(
            "/api/Hld1s/:code/:start_date/:end_date",
            get(hld1s::get_range),
        )
        .route(
            "/api/Hld1s/:code/:start_date/:end_date",
            put(hld1s::replace_range),
        )
        .route(
            "/api/Hld1s/:code/:start_date/:end_date",
            delete(hld1s::delete_range),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "SAP B1 Holiday Calendar API"
}

async fn health_handler() -> &'static str {
    "OK"
}
