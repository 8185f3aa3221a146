// Route exports
pub mod analysis;
pub mod health;

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .configure(health::configure)
        .configure(analysis::configure)
        .default_service(web::route().to(not_found));
}

/// JSON fallback for unknown paths
async fn not_found(req: HttpRequest) -> HttpResponse {
    let body = ErrorResponse::not_found(req.method().as_str(), req.path());
    tracing::debug!("{}", body.message);
    HttpResponse::build(StatusCode::NOT_FOUND).json(body)
}
