//! Listener address flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Where the HTTP listener binds.
#[derive(Debug, Args)]
pub struct ListenConfig {
    /// Interface address to bind
    #[arg(
        short = 'H',
        long = "host",
        env = "SERVER_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub ip: IpAddr,

    /// TCP port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,
}

impl From<&ListenConfig> for SocketAddr {
    fn from(listen: &ListenConfig) -> Self {
        Self::new(listen.ip, listen.port)
    }
}
