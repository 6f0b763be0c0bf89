use log::{debug, info};
use tanuki_quiz::{config::Config, web};

type MainResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> MainResult {
    // Loaded before the logger so RUST_LOG can come from .env too.
    let dotenv_result = dotenv::dotenv();

    pretty_env_logger::init();
    info!("Starting tanuki quiz...");
    if let Err(err) = dotenv_result {
        debug!("No .env loaded: {}", err);
    }

    let config = Config::from_env()?;
    info!(
        "Catalog ready with {} entries, assets in {}",
        config.catalog.entries().len(),
        config.assets_dir.display()
    );

    web::serve(config).await?;
    Ok(())
}
