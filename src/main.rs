use std::net::{IpAddr, SocketAddr};

use backend::{
    AppState,
    config::Config,
    database::{PgRepository, schema},
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");
    let connect_options = config
        .connect_options()
        .expect("Invalid database configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(connect_options)
        .await
        .expect("Failed to connect to Postgres");

    if config.database_init_schema {
        schema::init(&pool)
            .await
            .expect("Failed to initialise database schema");
    }

    let state = AppState::new(PgRepository::new(pool));
    let app = backend::app(state, &config.api_base_uri);

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {} (API prefix {:?})", addr, config.api_base_uri);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
