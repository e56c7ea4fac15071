//! Backend entry-point: wires persistence, the Gemini gateway, the domain
//! services, and the REST endpoints.

use std::env;
use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::{web, App, HttpServer};
use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use mockable::DefaultClock;
use reqwest::Url;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
use utoipa::OpenApi;

use backend::domain::{
    DashboardService, ExpenseService, RecommendationService, TripService,
};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::{dashboard, expenses, recommendations, trips, users};
use backend::outbound::gemini::{GeminiConfig, GeminiHttpSource};
use backend::outbound::persistence::{
    DbPool, DieselExpenseRepository, DieselLoginService, DieselRecommendationRepository,
    DieselTripRepository, PoolConfig,
};
use backend::ApiDoc;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    run_migrations(database_url.clone()).await?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;

    let key = session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let state = build_state(pool).map_err(std::io::Error::other)?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

    HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        let api = web::scope("/api/v1")
            .wrap(session)
            .service(users::register)
            .service(users::login)
            .service(users::logout)
            .service(trips::create_trip)
            .service(trips::list_trips)
            .service(trips::get_trip)
            .service(trips::update_trip)
            .service(trips::delete_trip)
            .service(expenses::add_expense)
            .service(expenses::list_expenses)
            .service(expenses::delete_expense)
            .service(recommendations::generate_recommendation)
            .service(recommendations::list_recommendations)
            .service(recommendations::delete_recommendation)
            .service(dashboard::get_dashboard);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(api)
            .route("/api-docs/openapi.json", web::get().to(openapi_json))
    })
    .bind(bind_addr)?
    .run()
    .await
}

async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Apply pending migrations over a short-lived synchronous connection.
async fn run_migrations(database_url: String) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url)
            .map_err(|e| format!("failed to connect for migrations: {e}"))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| format!("failed to run migrations: {e}"))?;
        Ok::<_, String>(())
    })
    .await
    .map_err(|e| std::io::Error::other(format!("migration task panicked: {e}")))?
    .map_err(std::io::Error::other)
}

/// Load the session signing key, falling back to an ephemeral key only in
/// debug builds or when explicitly allowed.
fn session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

/// Wire the Diesel adapters and the Gemini gateway into the domain services
/// behind the HTTP state.
fn build_state(pool: DbPool) -> Result<HttpState, String> {
    let trip_repo = Arc::new(DieselTripRepository::new(pool.clone()));
    let expense_repo = Arc::new(DieselExpenseRepository::new(pool.clone()));
    let recommendation_repo = Arc::new(DieselRecommendationRepository::new(pool.clone()));
    let accounts = Arc::new(DieselLoginService::new(pool));

    let gemini_url = env::var("GEMINI_API_URL")
        .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into());
    let gemini_url =
        Url::parse(&gemini_url).map_err(|e| format!("invalid GEMINI_API_URL: {e}"))?;
    let api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
        warn!("GEMINI_API_KEY not set; generation requests will be rejected upstream");
        String::new()
    });
    let mut gemini_config = GeminiConfig::new(gemini_url, api_key);
    if let Ok(model) = env::var("GEMINI_MODEL") {
        gemini_config = gemini_config.with_model(model);
    }
    let gemini = Arc::new(
        GeminiHttpSource::new(gemini_config)
            .map_err(|e| format!("failed to build generation client: {e}"))?,
    );

    let trips = Arc::new(TripService::new(trip_repo.clone()));
    let expenses = Arc::new(ExpenseService::new(trip_repo.clone(), expense_repo.clone()));
    let recommendations = Arc::new(RecommendationService::new(recommendation_repo, gemini));
    let dashboard = Arc::new(DashboardService::new(
        trip_repo,
        expense_repo,
        Arc::new(DefaultClock),
    ));

    Ok(HttpState {
        login: accounts.clone(),
        onboarding: accounts,
        trips: trips.clone(),
        trips_query: trips,
        expenses: expenses.clone(),
        expenses_query: expenses,
        recommendations: recommendations.clone(),
        recommendations_query: recommendations,
        dashboard,
    })
}
