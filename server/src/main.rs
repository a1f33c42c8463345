use anyhow::Result;
use axum::Router;
use boolsearch_core::config::DEFAULT_BUCKET_COUNT;
use boolsearch_core::{BooleanIndex, IndexConfig};
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use server::{build_app, load_documents};
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// JSONL file of documents to index at startup
    #[arg(long)]
    documents: Option<String>,
    /// Hash buckets in the term dictionary
    #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
    bucket_count: usize,
    /// Host to bind; loopback unless exposed on purpose
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = IndexConfig::with_bucket_count(args.bucket_count);
    let index = match &args.documents {
        Some(path) => load_documents(path, config)?,
        None => BooleanIndex::with_config(config),
    };
    let app: Router = build_app(index);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
