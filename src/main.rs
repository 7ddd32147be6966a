use dotenv::dotenv;
use tracing_subscriber::filter::LevelFilter;

use rentwise::cli::main_menu;
use rentwise::config::Config;
use rentwise::db::{self, DBClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    dotenv().ok();

    let config = Config::init();

    let pool = match db::connect(&config.database_url).await {
        Ok(pool) => {
            tracing::info!(database_url = %config.database_url, "connected to the database");
            pool
        }
        Err(err) => {
            eprintln!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let db_client = DBClient::new(pool);
    db_client.init_db().await?;

    main_menu::run(&db_client).await
}
