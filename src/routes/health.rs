use actix_web::{web, HttpResponse};
use crate::models::{HealthResponse, StatusResponse};

/// Configure liveness and status routes
///
/// Both answer any method; probes and dashboards are not required to use GET.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::route().to(health_check))
        .route("/status", web::route().to(status));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Status endpoint
///
/// GET /status
///
/// Dependencies are not probed; redis and backend always read "connected".
async fn status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::ok())
}
