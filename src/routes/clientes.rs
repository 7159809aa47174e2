use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::db::CustomerRepository;
use crate::domain::customer::CustomerError;
use crate::models::{CustomerPatch, NewCustomer};

// ============================================================================
// Customer Handlers - Status Code Mapping
// ============================================================================
//
// NotFound → 404, validation → 422, DuplicateEmail → 409, storage → 500.
// Error bodies are JSON {"detail": "..."}.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] CustomerError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CustomerError::NotFound => StatusCode::NOT_FOUND,
            CustomerError::DuplicateEmail => StatusCode::CONFLICT,
            e if e.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            CustomerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match &self.0 {
            // Never leak driver details to callers
            CustomerError::Database(err) => {
                tracing::error!(error = %err, "Storage error while handling request");
                "Erro interno".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": detail }))
    }
}

pub async fn list(repo: web::Data<CustomerRepository>) -> Result<HttpResponse, ApiError> {
    let customers = repo.list().await?;
    Ok(HttpResponse::Ok().json(customers))
}

pub async fn get(
    repo: web::Data<CustomerRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let customer = repo.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

pub async fn create(
    repo: web::Data<CustomerRepository>,
    payload: web::Json<NewCustomer>,
) -> Result<HttpResponse, ApiError> {
    let customer = repo.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(customer))
}

pub async fn update(
    repo: web::Data<CustomerRepository>,
    id: web::Path<i64>,
    payload: web::Json<CustomerPatch>,
) -> Result<HttpResponse, ApiError> {
    let customer = repo.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

pub async fn delete(
    repo: web::Data<CustomerRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    repo.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ============================================================================
// Handler Tests
// ============================================================================
