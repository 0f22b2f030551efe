use restaurant_reviews::infra::{config, logging};
use restaurant_reviews::transport;
use restaurant_reviews::DatabaseService;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init(&config::log_filter());

    let bind_addr = config::bind_addr()?;
    let database_url = config::database_url();

    info!("initializing DatabaseService");
    let db_service = DatabaseService::connect(&database_url).await?;

    let app = transport::http::create_app(transport::http::AppState::new(db_service));
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
