use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the blob-hosting service (default: JSONBin v3).
    pub base_url: String,
    /// Master key sent with every request.
    pub api_key: String,
    /// Document id of the primary blob (users, workers, tickets).
    pub primary_bin_id: String,
    /// Document id of the menu blob (overrides + weekly template).
    pub menu_bin_id: String,
    /// Per-request timeout in milliseconds (default: 8000).
    pub request_timeout_ms: u64,
    /// Read-cache TTL in seconds (default: 10).
    pub cache_ttl_seconds: u64,
    /// Email domain suffix identifying student accounts.
    pub student_email_domain: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MENSA_BASE_URL` - Blob service base URL (default: "https://api.jsonbin.io/v3/b")
    /// - `MENSA_API_KEY` - Master key for the blob service (default: empty)
    /// - `MENSA_PRIMARY_BIN` - Primary document id (default: empty)
    /// - `MENSA_MENU_BIN` - Menu document id (default: empty)
    /// - `MENSA_TIMEOUT_MS` - Request timeout in milliseconds (default: 8000)
    /// - `MENSA_CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 10)
    /// - `MENSA_STUDENT_DOMAIN` - Student email suffix (default: "@stu.kau.edu.sa")
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("MENSA_BASE_URL")
                .unwrap_or_else(|_| "https://api.jsonbin.io/v3/b".to_string()),
            api_key: env::var("MENSA_API_KEY").unwrap_or_default(),
            primary_bin_id: env::var("MENSA_PRIMARY_BIN").unwrap_or_default(),
            menu_bin_id: env::var("MENSA_MENU_BIN").unwrap_or_default(),
            request_timeout_ms: env::var("MENSA_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            cache_ttl_seconds: env::var("MENSA_CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            student_email_domain: env::var("MENSA_STUDENT_DOMAIN")
                .unwrap_or_else(|_| "@stu.kau.edu.sa".to_string()),
        }
    }

    /// Get the per-request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Get the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            base_url: "https://api.jsonbin.io/v3/b".to_string(),
            api_key: "key".to_string(),
            primary_bin_id: "primary".to_string(),
            menu_bin_id: "menu".to_string(),
            request_timeout_ms: 8000,
            cache_ttl_seconds: 10,
            student_email_domain: "@stu.kau.edu.sa".to_string(),
        }
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_ms: 2500,
            ..test_config()
        };
        assert_eq!(config.request_timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn test_cache_ttl_conversion() {
        let config = Config {
            cache_ttl_seconds: 60,
            ..test_config()
        };
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }
}
