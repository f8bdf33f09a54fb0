use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use schoolhouse::logging::init_tracing;
use schoolhouse::router::init_router;
use schoolhouse::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _log_guard = init_tracing()?;

    let state = init_app_state().await?;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("failed to run database migrations")?;

    let bind_addr = state.server_config.bind_addr();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(address = %bind_addr, "server listening");
    info!("Swagger UI available at http://{bind_addr}/docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
