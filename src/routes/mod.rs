use actix_web::HttpResponse;
use log::error;
use tera::{Context, Tera};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Renders a Tera template to an HTML response.
pub(crate) fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure onto the error envelope. The detail string stays
/// generic; the underlying error is only logged.
pub(crate) fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            details: "requested record was not found".to_string(),
        }),
        ServiceError::Repository(_) => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Internal server error".to_string(),
            details: "advocate store query failed".to_string(),
        }),
        ServiceError::Internal(_) => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Internal server error".to_string(),
            details: "unexpected internal error".to_string(),
        }),
    }
}
