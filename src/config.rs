// =============================================================================
// Runtime Configuration — Environment-derived settings
// =============================================================================
//
// Every tunable lives here: bind address and port for the HTTP surface and
// the default range/interval forwarded to the market-data provider. All
// values come from the environment with sensible defaults, so a bare
// `cargo run` works out of the box.
//
//   HELIOS_BIND       bind address        (default "0.0.0.0")
//   HELIOS_PORT       listen port         (default 8080)
//   HELIOS_RANGE      provider range      (default "1y")
//   HELIOS_INTERVAL   provider interval   (default "1d")

use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub default_range: String,
    pub default_interval: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults on
    /// missing or unparsable values.
    pub fn from_env() -> Self {
        let port = match std::env::var("HELIOS_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(raw = %raw, "HELIOS_PORT is not a valid port, using 8080");
                8080
            }),
            Err(_) => 8080,
        };

        Self {
            bind: env_or("HELIOS_BIND", "0.0.0.0"),
            port,
            default_range: env_or("HELIOS_RANGE", "1y"),
            default_interval: env_or("HELIOS_INTERVAL", "1d"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            default_range: "1y".to_string(),
            default_interval: "1d".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
