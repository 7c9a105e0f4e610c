mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    infrastructure::{
        config::TableStoreConfig, table_store_repository::RestTableCredentialRepository,
    },
    presentation::handlers::auth_handler::{create_auth_router, health},
    usecase::reset_password_usecase::ResetPasswordUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TableStoreConfig::from_env()?;
    let credential_repository = RestTableCredentialRepository::new(config);
    let reset_service = ResetPasswordUsecase::new(credential_repository);

    // The browser form widget posts from another origin.
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/auth", create_auth_router(reset_service))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
