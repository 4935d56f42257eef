use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::stock::{repository::StockRepository, StockService};

pub mod stock;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus the stock resource under `/api/stock`.
pub fn build_router<R: StockRepository + 'static>(stock_service: Arc<StockService<R>>, cors: CorsLayer) -> Router {
    let stock_routes = Router::new()
        .route("/api/stock", get(stock::search::<R>).post(stock::create::<R>))
        .route(
            "/api/stock/:id",
            get(stock::get::<R>).put(stock::update::<R>).delete(stock::delete::<R>),
        )
        .with_state(stock_service);

    Router::new()
        .route("/health", get(health))
        .merge(stock_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
