//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Startup errors use `anyhow`; request-level errors are handled by the
//! domain crates' own response conversions.

mod pages;

use auth::application::config::{AuthConfig, GoogleConfig};
use auth::domain::repository::SessionRepository;
use auth::presentation::middleware::{AuthGateState, require_session};
use auth::{PgAuthRepository, auth_router};
use axum::extract::Request;
use axum::middleware::Next;
use axum::routing::get;
use axum::{Router, middleware};
use base64::Engine;
use base64::engine::general_purpose;
use secrets::{PgSecretRepository, secrets_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,secrets=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions and OAuth states
    // Errors here should not prevent server startup
    let auth_repo = PgAuthRepository::new(pool.clone());
    match auth_repo.delete_expired().await {
        Ok(sessions) => {
            tracing::info!(
                sessions_deleted = sessions,
                "Auth session cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Auth session cleanup failed, continuing anyway"
            );
        }
    }

    let config = load_auth_config()?;

    // Auth gate for the protected surface
    let gate_state = AuthGateState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(config.clone()),
    };
    let gate = middleware::from_fn(move |req: Request, next: Next| {
        let state = gate_state.clone();
        async move { require_session(state, req, next).await }
    });

    let protected = secrets_router(PgSecretRepository::new(pool.clone()))
        .route("/submit", get(pages::submit_page))
        .layer(gate);

    // Build router
    let app = Router::new()
        .route("/", get(pages::home_page))
        .route("/login", get(pages::login_page))
        .route("/register", get(pages::register_page))
        .merge(auth_router(auth_repo, config))
        .merge(protected)
        .layer(TraceLayer::new_for_http());

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Assemble the auth configuration from the environment
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
        let pepper = Engine::decode(&general_purpose::STANDARD, &pepper_b64)?;
        config.password_pepper = Some(pepper);
    }

    match (
        env::var("GOOGLE_CLIENT_ID"),
        env::var("GOOGLE_CLIENT_SECRET"),
        env::var("GOOGLE_REDIRECT_URL"),
    ) {
        (Ok(client_id), Ok(client_secret), Ok(redirect_url)) => {
            config.google = Some(GoogleConfig::new(client_id, client_secret, redirect_url)?);
            tracing::info!("Google sign-in enabled");
        }
        _ => {
            tracing::warn!("Google OAuth credentials not set, Google sign-in disabled");
        }
    }

    Ok(config)
}
