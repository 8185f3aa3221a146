use actix_web::{http::header, web, HttpRequest, HttpResponse};
use crate::models::AnalysisResponse;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/analyze")
            .route(web::post().to(analyze))
            .default_service(web::route().to(method_not_allowed)),
    );
}

/// Analyze endpoint
///
/// POST /api/analyze
///
/// Request body:
/// ```json
/// {
///   "metrics": [...]
/// }
/// ```
///
/// The body is never read, so its size and content cannot change the result.
async fn analyze(req: HttpRequest) -> HttpResponse {
    tracing::debug!(
        "Analyze request ignored body (content-length: {:?})",
        req.headers().get(header::CONTENT_LENGTH)
    );

    HttpResponse::Ok().json(AnalysisResponse::completed())
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .content_type(header::ContentType::json())
        .finish()
}
