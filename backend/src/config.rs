use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{
    env,
    net::{IpAddr, SocketAddr},
    time::Duration,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_max_age_hours: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_value = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let host: IpAddr = host_value
            .parse()
            .map_err(|_| anyhow!("Invalid APP_HOST value: {}", host_value))?;

        let port_value = lookup("APP_PORT").unwrap_or_else(|| "3000".to_string());
        let port: u16 = port_value
            .parse()
            .map_err(|_| anyhow!("Invalid APP_PORT value: {}", port_value))?;

        let cors_max_age_hours = lookup("CORS_MAX_AGE_HOURS")
            .unwrap_or_else(|| "24".to_string())
            .parse()
            .unwrap_or(24);

        Ok(Config {
            host,
            port,
            cors_max_age_hours,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn cors_max_age(&self) -> Duration {
        Duration::from_secs(self.cors_max_age_hours * 60 * 60)
    }
}
