use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::AdvocatesQueryParams;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::api as api_service;

#[get("/v1/advocates")]
pub async fn api_v1_advocates(
    params: web::Query<AdvocatesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_advocates(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            service_error_response(&e)
        }
    }
}
