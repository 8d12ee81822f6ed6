use click_me::{resolve_data_path, router, AppState, FileStore};
use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let store = FileStore::open(resolve_data_path()).await?;
    let audio_path = env::var("CLICK_AUDIO_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets/click.mp3"));
    let state = AppState::new(Arc::new(store), audio_path);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to install ctrl-c handler: {err}");
            std::future::pending::<()>().await;
        }
    }
}
