use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::make_app;

mod config;
mod datamodel;
mod server;

#[cfg(test)]
mod client;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::parse();

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);
    info!("API docs at http://{}/api-docs", listener.local_addr()?);

    axum::serve(listener, make_app()).await?;
    Ok(())
}
