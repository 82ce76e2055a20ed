use actix_web::{App, test, web};
use tera::Tera;

use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::repository::{AdvocateWriter, DieselRepository};
use advocate_directory::routes::api::api_v1_advocates;
use advocate_directory::routes::main::show_index;

mod common;

fn seed_repo(repo: &DieselRepository) {
    let advocates = vec![
        NewAdvocate::new(
            "Jane".into(),
            "Doe".into(),
            "Springfield".into(),
            "MD".into(),
            vec!["cardiology".into()],
            5,
            "5550100".into(),
        ),
        NewAdvocate::new(
            "John".into(),
            "Smith".into(),
            "Portland".into(),
            "DO".into(),
            vec!["pediatrics".into()],
            10,
            "5550101".into(),
        ),
        NewAdvocate::new(
            "Maria".into(),
            "Garcia".into(),
            "Springfield".into(),
            "MD".into(),
            vec!["cardiology".into(), "pediatrics".into()],
            2,
            "5550102".into(),
        ),
    ];
    repo.create_advocates(&advocates).unwrap();
}

#[actix_web::test]
async fn test_api_v1_advocates_envelope() {
    let test_db = common::TestDb::new("test_api_envelope.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_repo(&repo);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(web::scope("/api").service(api_v1_advocates)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/advocates?cities=Springfield&pageSize=10")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["firstName"], "Jane");
    assert_eq!(data[0]["yearsOfExperience"], 5);
    assert_eq!(data[1]["firstName"], "Maria");

    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["pageSize"], 10);
    assert_eq!(body["pagination"]["totalPages"], 1);
    assert!(body.get("filterOptions").is_none());
}

#[actix_web::test]
async fn test_api_v1_advocates_specialty_sort_and_options() {
    let test_db = common::TestDb::new("test_api_specialties.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_repo(&repo);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(web::scope("/api").service(api_v1_advocates)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(
            "/api/v1/advocates?specialties=pediatrics&sortColumn=yearsOfExperience\
             &sortDirection=desc&includeFilterOptions=true",
        )
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["firstName"], "John");
    assert_eq!(data[1]["firstName"], "Maria");
    assert_eq!(body["pagination"]["total"], 2);

    let options = &body["filterOptions"];
    assert_eq!(
        options["cities"],
        serde_json::json!(["Portland", "Springfield"])
    );
    assert_eq!(
        options["specialties"],
        serde_json::json!(["cardiology", "pediatrics"])
    );
    assert_eq!(options["degrees"], serde_json::json!(["DO", "MD"]));
}

#[actix_web::test]
async fn test_api_v1_advocates_defaults_malformed_paging() {
    let test_db = common::TestDb::new("test_api_malformed.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_repo(&repo);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(web::scope("/api").service(api_v1_advocates)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/advocates?page=abc&pageSize=bogus&sortColumn=payload")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["pageSize"], 10);
    assert_eq!(body["pagination"]["total"], 3);

    // Unknown sort column falls back to id ascending.
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["firstName"], "Jane");
    assert_eq!(data[2]["firstName"], "Maria");
}

#[actix_web::test]
async fn test_index_page_renders_table_and_filters() {
    let test_db = common::TestDb::new("test_index_page.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_repo(&repo);

    let tera = Tera::new("templates/**/*.html").unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(tera))
            .service(show_index),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/?cities=Springfield&cities=Portland&search=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Jane"));
    assert!(html.contains("John"));
    assert!(html.contains("cardiology"));
    assert!(html.contains("Reset all filters"));
}
