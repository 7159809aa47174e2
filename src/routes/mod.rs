use actix_web::{error, web, HttpRequest, HttpResponse, Responder};

pub mod clientes;

pub use clientes::ApiError;

// ============================================================================
// HTTP Surface
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health_handler))
        .service(
            web::scope("/clientes")
                .route("", web::get().to(clientes::list))
                .route("", web::post().to(clientes::create))
                .route("/{id}", web::get().to(clientes::get))
                .route("/{id}", web::put().to(clientes::update))
                .route("/{id}", web::delete().to(clientes::delete)),
        );
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "clientes-api"
    }))
}

/// Malformed or incomplete JSON bodies surface as 422, not actix's default 400.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(serde_json::json!({ "detail": detail })),
    )
    .into()
}

/// Non-numeric path ids get the same treatment.
fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(serde_json::json!({ "detail": detail })),
    )
    .into()
}
