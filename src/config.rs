// Server configuration: command-line flags with environment fallbacks

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-server", version, about = "Receipt points API server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "RECEIPT_PROCESSOR_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Debug-level logging for the receipt processor
    #[arg(short, long, env = "RECEIPT_PROCESSOR_VERBOSE")]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind))
    }
}
