//! # HTTP API Module
//!
//! Axum routes exposing the rules engine:
//!
//! - `POST /api/business/validate-order` - validate an order JSON body
//! - `GET  /api/business/standards` - the active standards table
//! - `POST /api/business/quick-test` - validation run against a canned order
//! - `GET  /api/business/health` - engine health probe with timing
//!
//! The engine is shared behind an [`Arc`]; it holds no mutable state, so
//! handlers run concurrently without locking.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::engine::BusinessRulesEngine;
use crate::order::{MenuItem, Order, ServiceItem};
use crate::report::Report;
use crate::standards::BusinessStandards;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<BusinessRulesEngine>,
}

impl AppState {
    /// Wrap an engine for serving
    pub fn new(engine: BusinessRulesEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// Build the business API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/business/validate-order", post(validate_order))
        .route("/api/business/standards", get(get_standards))
        .route("/api/business/quick-test", post(quick_test))
        .route("/api/business/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Validate an order against the business rules
async fn validate_order(State(state): State<AppState>, Json(order): Json<Order>) -> Json<Report> {
    info!(
        order_number = order.order_info.number.as_deref().unwrap_or("-"),
        guests = order.order_info.guests,
        "validating order"
    );
    Json(state.engine.validate_order(&order))
}

/// Response for the standards endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct StandardsResponse {
    pub service: String,
    pub version: String,
    pub standards: BusinessStandards,
}

/// Return the active standards table
async fn get_standards(State(state): State<AppState>) -> Json<StandardsResponse> {
    Json(StandardsResponse {
        service: "Catering Business Standards".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        standards: state.engine.standards().clone(),
    })
}

/// Response for the quick-test endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct QuickTestResponse {
    pub message: String,
    pub test_order: Order,
    pub validation_result: Report,
}

/// Run validation against a canned sample order
async fn quick_test(State(state): State<AppState>) -> Json<QuickTestResponse> {
    let order = sample_order();
    let report = state.engine.validate_order(&order);

    Json(QuickTestResponse {
        message: "Sample validation completed".to_string(),
        test_order: order,
        validation_result: report,
    })
}

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub response_time_ms: f64,
    pub test_status: String,
    pub test_validations: usize,
}

/// Validate a minimal probe order and report timing
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let probe = Order::new().with_guests(1).with_totals(250.0, 10_000.0);

    let started = Instant::now();
    let report = state.engine.validate_order(&probe);
    let elapsed = started.elapsed();

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "catering-rules".to_string(),
        response_time_ms: elapsed.as_secs_f64() * 1000.0,
        test_status: report.overall_status.to_string(),
        test_validations: report.summary.total_validations,
    })
}

/// The canned order used by the quick-test endpoint
fn sample_order() -> Order {
    Order::new()
        .with_guests(25)
        .with_date("2027-02-15")
        .with_number("TEST-001")
        .with_menu_item(
            MenuItem::new("Salmon canapé")
                .with_category("canapes")
                .with_quantity(50.0),
        )
        .with_menu_item(
            MenuItem::new("Caesar salad")
                .with_category("salads")
                .with_quantity(25.0),
        )
        .with_service(
            ServiceItem::new("Waiter")
                .with_quantity(2)
                .with_duration(4.0)
                .with_cost(19_000.0),
        )
        .with_totals(8500.0, 65_000.0)
}
