use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Storage is disabled when unset; submissions then fail with "not configured".
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_optional("DATABASE_URL");

        let host: IpAddr = env_or("FORMPOST_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMPOST_HOST: {e}"))?;

        let port: u16 = env_or("FORMPOST_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid FORMPOST_PORT: {e}"))?;

        let data_file = PathBuf::from(env_or("FORMPOST_DATA_FILE", "data.json"));
        let static_dir = PathBuf::from(env_or("FORMPOST_STATIC_DIR", "static"));

        let max_body_size: usize = env_or("FORMPOST_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMPOST_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMPOST_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            data_file,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            data_file: PathBuf::from("data.json"),
            static_dir: PathBuf::from("static"),
            max_body_size: 1_048_576,
            log_level: "info".to_string(),
        }
    }
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
