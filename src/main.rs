pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::education::{
    adapter::outgoing::EducationStorePostgres, application::domain::EducationRecord,
};
use crate::modules::experience::{
    adapter::outgoing::ExperienceStorePostgres, application::domain::ExperienceRecord,
};
use crate::modules::project::{
    adapter::outgoing::ProjectStorePostgres, application::domain::ProjectRecord,
};
use crate::modules::resource::{
    adapter::{incoming::web::mount, outgoing::InMemoryStore},
    application::{
        domain::Resource,
        ports::{incoming::ManageResource, outgoing::ResourceStore},
        services::ResourceService,
    },
};
use crate::modules::skill::{
    adapter::outgoing::SkillStorePostgres, application::domain::SkillRecord,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_dotenv, AppConfig, DatabaseConfig, StoreBackend};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// One use-case handle per resource kind, shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub education: Arc<dyn ManageResource<EducationRecord>>,
    pub experience: Arc<dyn ManageResource<ExperienceRecord>>,
    pub skills: Arc<dyn ManageResource<SkillRecord>>,
    pub projects: Arc<dyn ManageResource<ProjectRecord>>,
}

impl AppState {
    pub fn postgres(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            education: service(EducationStorePostgres::new(Arc::clone(db))),
            experience: service(ExperienceStorePostgres::new(Arc::clone(db))),
            skills: service(SkillStorePostgres::new(Arc::clone(db))),
            projects: service(ProjectStorePostgres::new(Arc::clone(db))),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            education: service(InMemoryStore::new()),
            experience: service(InMemoryStore::new()),
            skills: service(InMemoryStore::new()),
            projects: service(InMemoryStore::new()),
        }
    }
}

pub fn service<R, S>(store: S) -> Arc<dyn ManageResource<R>>
where
    R: Resource,
    S: ResourceStore<R> + 'static,
{
    Arc::new(ResourceService::new(store))
}

async fn connect_database(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    info!("Database connected");

    if config.auto_migrate {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    Ok(conn)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = load_dotenv();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();
    let json_limit = config.json_limit;

    let (state, db) = match &config.store {
        StoreBackend::Postgres(db_config) => {
            let db = Arc::new(connect_database(db_config).await?);
            (AppState::postgres(&db), Some(db))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; records are lost on shutdown");
            (AppState::in_memory(), None)
        }
    };

    info!(env = %env, "Server run on: {}", server_url);

    let db_for_server = db.clone();

    HttpServer::new(move || {
        let mut app = App::new().app_data(custom_json_config(json_limit));

        if let Some(db) = &db_for_server {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        let state = state.clone();
        app.configure(move |cfg| init_routes(cfg, &state))
    })
    .bind(&server_url)?
    .run()
    .await?;

    info!("Server stopped");

    if let Some(db) = db {
        match Arc::try_unwrap(db) {
            Ok(conn) => {
                conn.close().await.context("Failed to close database")?;
                info!("Database connection closed");
            }
            Err(_) => warn!("Database handle still shared at shutdown; dropping it"),
        }
    }

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    // Operational
    cfg.service(crate::health::index);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi_json);
    // Resources
    mount::<EducationRecord>(cfg, Arc::clone(&state.education));
    mount::<ExperienceRecord>(cfg, Arc::clone(&state.experience));
    mount::<SkillRecord>(cfg, Arc::clone(&state.skills));
    mount::<ProjectRecord>(cfg, Arc::clone(&state.projects));
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
