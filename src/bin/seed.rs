//! Populates the configured database with the fixed development data set.
//!
//! Usage: `cargo run --bin seed` (honours `DATABASE_URL` and `.env`).

use restaurant_reviews::app::seed;
use restaurant_reviews::infra::{config, logging};
use restaurant_reviews::DatabaseService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init(&config::log_filter());

    let db_service = DatabaseService::connect(&config::database_url()).await?;
    let summary = seed::run(&db_service).await?;

    println!(
        "Database seeded successfully! ({} restaurants, {} customers, {} reviews)",
        summary.restaurants, summary.customers, summary.reviews
    );
    Ok(())
}
