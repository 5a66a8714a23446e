//! HTTP surface for one finished simulation
//!
//! The three array endpoints answer `{"y": [...]}`: recovered bits, the
//! magnitudes of the transmitted samples, and the original bits. Every other
//! path falls through to the static file directory.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use ltesim_core::{ChannelError, SimulationReport};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

type SharedReport = Arc<SimulationReport>;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Data {
    pub y: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub num_bits: usize,
    pub snr_db: f64,
    pub bit_errors: usize,
    pub match_ratio: f64,
}

/// Core failures surface as 500 with the error text
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Simulation(#[from] ChannelError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub fn router(report: SharedReport, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/api/endpoint1", get(recovered_bits))
        .route("/api/endpoint2", get(transmitted_norms))
        .route("/api/endpoint3", get(original_bits))
        .route("/api/summary", get(summary))
        .with_state(report);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn recovered_bits(State(report): State<SharedReport>) -> Json<Data> {
    Json(Data {
        y: report.recovered_bits_i64(),
    })
}

async fn transmitted_norms(State(report): State<SharedReport>) -> Json<Data> {
    Json(Data {
        y: report.transmitted_norms(),
    })
}

async fn original_bits(State(report): State<SharedReport>) -> Json<Data> {
    Json(Data {
        y: report.original_bits_i64(),
    })
}

async fn summary(State(report): State<SharedReport>) -> Result<Json<Summary>, AppError> {
    Ok(Json(summarize(&report)?))
}

fn summarize(report: &SimulationReport) -> Result<Summary, AppError> {
    Ok(Summary {
        num_bits: report.original_bits.len(),
        snr_db: report.snr_db,
        bit_errors: report.bit_errors()?,
        match_ratio: report.match_ratio,
    })
}
