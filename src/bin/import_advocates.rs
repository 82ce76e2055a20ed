//! CSV bulk importer seeding the advocate store.
//!
//! Reads a CSV file (first argument, defaults to `data/advocates.csv`) whose
//! `specialties` column holds semicolon-separated tags, and inserts every row
//! into the configured database.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde::Deserialize;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::models::config::ServerConfig;
use advocate_directory::repository::{AdvocateWriter, DieselRepository};

#[derive(Debug, Deserialize)]
struct AdvocateRecord {
    first_name: String,
    last_name: String,
    city: String,
    degree: String,
    years_of_experience: i32,
    phone_number: String,
    #[serde(default)]
    specialties: String,
}

impl From<AdvocateRecord> for NewAdvocate {
    fn from(record: AdvocateRecord) -> Self {
        let specialties = record
            .specialties
            .split(';')
            .map(str::to_string)
            .collect::<Vec<_>>();

        NewAdvocate::new(
            record.first_name,
            record.last_name,
            record.city,
            record.degree,
            specialties,
            record.years_of_experience,
            record.phone_number,
        )
    }
}

fn read_advocates(path: &str) -> Result<Vec<NewAdvocate>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize::<AdvocateRecord>()
        .map(|row| row.map(Into::into))
        .collect()
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let csv_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/advocates.csv".to_string());

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let advocates = match read_advocates(&csv_path) {
        Ok(advocates) => advocates,
        Err(err) => {
            log::error!("Failed to parse {csv_path}: {err}");
            std::process::exit(1);
        }
    };

    if advocates.is_empty() {
        log::warn!("No advocate rows found in {csv_path}");
        return;
    }

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match repo.create_advocates(&advocates) {
        Ok(inserted) => log::info!("Imported {inserted} advocates from {csv_path}"),
        Err(e) => {
            log::error!("Failed to import advocates: {e}");
            std::process::exit(1);
        }
    }
}
