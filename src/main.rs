use todo_api::{
    application::todo_service::TodoServiceImpl,
    config::Config,
    http::{routes::todos, routing},
    infrastructure::memory_repo::InMemoryTodoRepository,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let service = TodoServiceImpl::new(InMemoryTodoRepository::seeded());
    let router = routing::app(todos::AppState { service });

    let addr = config.bind_addr;
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
