use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wilder_api::config::ServerArgs;
use wilder_api::server;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(&args);

    info!("Starting server on port {}", args.port);
    server::start_server(args.port, &args.database, args.cors_origin.as_deref()).await?;

    Ok(())
}

fn setup_logging(args: &ServerArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_filter()))
        .without_time()
        .init();
}
