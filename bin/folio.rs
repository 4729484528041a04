use anyhow::Result;
use clap::Parser;
use folio::{create_router, AppState, SearchMetrics, Searcher, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Full-text search over the complete works of Shakespeare", long_about = None)]
struct Args {
    /// HTTP port to listen on
    #[arg(long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Path to the corpus file
    #[arg(long, env = "FOLIO_CORPUS", default_value = "completeworks.txt")]
    corpus: PathBuf,

    /// Directory of static frontend assets
    #[arg(long, env = "FOLIO_STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::new(args.port, args.corpus, args.static_dir);

    info!("Starting Folio v{}", folio::VERSION);
    info!("  Corpus: {:?}", config.corpus_path);
    info!("  Static assets: {:?}", config.static_dir);

    // Index build runs to completion before the listener binds; everything
    // the handlers touch is immutable from here on.
    let searcher = Arc::new(Searcher::load(&config.corpus_path)?);
    info!(
        "Corpus indexed: {} bytes, {} works resolved",
        searcher.corpus_len(),
        searcher.works_resolved()
    );

    let metrics = Arc::new(SearchMetrics::new()?);
    metrics.corpus_bytes.set(searcher.corpus_len() as f64);
    metrics.works_resolved.set(searcher.works_resolved() as f64);

    let app_state = AppState { searcher, metrics };
    let app = create_router(app_state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
            info!("Received shutdown signal, gracefully shutting down");
        })
        .await?;

    Ok(())
}
