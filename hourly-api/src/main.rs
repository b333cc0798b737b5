mod adapters;
mod app_state;
mod auth;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

use std::net::SocketAddr;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::fmt::time::LocalTime;
use url::Url;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "hourly_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with_timer(LocalTime::rfc_3339())
        .init();

    let settings = config::read_config()?;
    let app_url = Url::parse(&settings.application.app_url)?;

    let connection_pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(settings.database.connect_options()?)
        .await?;
    sqlx::migrate!().run(&connection_pool).await?;

    let app_state = factory::postgres_app_state(connection_pool.clone());
    let seeded = app_state
        .access
        .ensure_default_admin(
            &settings.auth.default_admin_email,
            &settings.auth.default_admin_password,
        )
        .await?;
    if seeded {
        tracing::warn!(
            "Created default admin {}; change its password",
            settings.auth.default_admin_email
        );
    }

    let session_store = router::persistent_session_store(connection_pool).await?;
    let auth_layer = router::auth_layer(session_store, app_state.access.clone(), &settings.auth);
    let app = router::create(app_state, auth_layer, &app_url);

    let addr: SocketAddr = format!("{}:{}", settings.application.host, settings.application.port)
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
