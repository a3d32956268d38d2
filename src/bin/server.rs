//! Service binary: load configuration, build the NLP toolkit and the
//! GIPHY client once, then serve until shutdown.

use giphy_search::GiphyClient;
use std::sync::Arc;
use sticker_mood::{QueryBuilder, ServiceConfig, StickerServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env();
    let builder = Arc::new(QueryBuilder::with_defaults());
    let giphy = Arc::new(
        GiphyClient::new(config.giphy.clone())
            .map_err(|e| anyhow::anyhow!("failed to build GIPHY client: {e}"))?,
    );

    let server = StickerServer::start(&config, builder, giphy).await?;
    server.wait().await;

    tracing::info!("sticker-mood shut down");
    Ok(())
}
