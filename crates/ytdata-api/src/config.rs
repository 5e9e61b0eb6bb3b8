//! API configuration.

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("YOUTUBE_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("YOUTUBE_API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        std::env::set_var("YOUTUBE_API_PORT", "not-a-port");
        let config = ApiConfig::from_env();
        assert_eq!(config.port, 8000);
        std::env::remove_var("YOUTUBE_API_PORT");
    }
}
