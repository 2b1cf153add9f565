use std::error::Error;

use bookshelf_api::start_server;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:9000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine, the defaults apply
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("BOOKSHELF_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let (_, server) = start_server(&addr).await?;
    server.await?;

    Ok(())
}
