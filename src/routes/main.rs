use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::dto::main::IndexQueryParams;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // Repeated form keys; malformed input falls back to an unfiltered page.
    let params: IndexQueryParams =
        serde_html_form::from_str(req.query_string()).unwrap_or_default();

    let data = match main_service::load_index_page(repo.get_ref(), params) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load index page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("advocates", &data.advocates);
    context.insert("pagination", &data.pagination);
    context.insert("filter_options", &data.filter_options);
    context.insert("search_query", &data.search_query);
    context.insert("selected_cities", &data.selected_cities);
    context.insert("selected_degrees", &data.selected_degrees);
    context.insert("selected_specialties", &data.selected_specialties);
    context.insert("sort_column", &data.sort_column);
    context.insert("sort_direction", &data.sort_direction);

    render_template(&tera, "main/index.html", &context)
}
