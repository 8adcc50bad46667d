use std::net::{
    IpAddr,
    Ipv4Addr,
};

const DEFAULT_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`Server`][`crate::Server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub address: IpAddr,
    /// Port to listen on. Port 0 selects any available port.
    pub port: u16,
    /// Agent name, sent back in the `Server` header of every response.
    pub agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            agent: DEFAULT_AGENT.to_owned(),
        }
    }
}
