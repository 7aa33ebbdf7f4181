use std::net::SocketAddr;

use clap::Parser;

/// In-memory books & authors REST service
#[derive(Parser, Debug, Clone)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "BOOKSHELF_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|err| anyhow::anyhow!("invalid listen address `{addr}`: {err}"))
    }
}
