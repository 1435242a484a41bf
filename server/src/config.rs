use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// Serves the compiled workout tracker frontend.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Output directory of `trunk build`
    #[arg(long, default_value = "frontend/dist")]
    pub dist: PathBuf,

    #[arg(long, default_value = "server/log")]
    pub log_dir: PathBuf,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("server.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["server"]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist, PathBuf::from("frontend/dist"));
        assert_eq!(config.log_file(), PathBuf::from("server/log/server.log"));
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::try_parse_from(["server", "--host", "127.0.0.1", "-p", "3000", "--dist", "/srv/www"]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist, PathBuf::from("/srv/www"));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(ServerConfig::try_parse_from(["server", "--port", "http"]).is_err());
    }
}
