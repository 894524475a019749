use std::net::{IpAddr, Ipv4Addr};

/// Server configuration. Defaults match the reference deployment: port 3000,
/// all-interfaces bind, 16 KiB request bodies.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            max_body_bytes: 16 * 1024,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

pub fn validate_startup_config(config: &ServerConfig) -> Result<(), String> {
    if config.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    Ok(())
}
