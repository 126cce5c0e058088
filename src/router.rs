use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Multi-entity service: assets, contributions, goals, questions, answers
/// and investment suggestions.
pub fn advisor_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/contributions/latest/:user_id",
            get(handlers::contributions::latest_contribution),
        )
        .route("/api/contributions", post(handlers::contributions::create_contribution))
        .route("/api/suggestions", get(handlers::suggestions::list_suggestions))
        .route("/api/goals/:user_id", get(handlers::goals::list_goals))
        .route("/api/goals", post(handlers::goals::create_goal))
        .route(
            "/api/questions",
            get(handlers::questions::list_questions).post(handlers::questions::create_question),
        )
        .route(
            "/api/asset-question-answers/:asset_id",
            get(handlers::answers::list_answers),
        )
        .route("/api/asset-question-answers", post(handlers::answers::create_answer))
        .route(
            "/api/assets",
            get(handlers::assets::list_assets).post(handlers::assets::create_asset),
        )
        .route("/api/assets/:asset_id", put(handlers::assets::update_asset))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origin)),
        )
}

/// Portfolio-focused service: assets keyed by ticker plus the portfolio summary.
pub fn portfolio_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/assets",
            get(handlers::assets::list_assets)
                .post(handlers::assets::create_asset)
                .put(handlers::assets::update_asset_by_ticker),
        )
        .route("/api/portfolio", get(handlers::portfolio::get_portfolio))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origin)),
        )
}

// Wildcard headers are not allowed together with credentials, so request
// headers are mirrored back instead.
fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health_check() -> &'static str {
    "OK"
}
