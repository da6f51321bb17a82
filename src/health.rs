use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::shared::backend::RestTransport;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the hosted backend
#[get("/ready")]
pub async fn readiness(backend: web::Data<Arc<dyn RestTransport>>) -> impl Responder {
    match backend.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            backend: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                backend: "unhealthy",
            })
        }
    }
}
