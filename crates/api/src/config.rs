use std::path::PathBuf;

use petshop_core::media::MediaConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://petshop.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Image upload storage settings.
    pub media: MediaConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `DATABASE_URL`         | `sqlite://petshop.db`      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MEDIA_ROOT`           | `media`                    |
    /// | `MEDIA_URL`            | `/media/`                  |
    /// | `MAX_IMAGE_SIZE_MB`    | `5`                        |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let host = get("HOST", "0.0.0.0");

        let port: u16 = get("PORT", "8000")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = get("DATABASE_URL", "sqlite://petshop.db");

        let cors_origins: Vec<String> = get("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = get("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_image_size_mb: f64 = get("MAX_IMAGE_SIZE_MB", "5")
            .parse()
            .expect("MAX_IMAGE_SIZE_MB must be a number");
        assert!(
            max_image_size_mb.is_finite(),
            "MAX_IMAGE_SIZE_MB must be a finite number"
        );
        assert!(
            max_image_size_mb > 0.0,
            "MAX_IMAGE_SIZE_MB must be greater than zero"
        );

        let media = MediaConfig {
            root: PathBuf::from(get("MEDIA_ROOT", "media")),
            url_prefix: get("MEDIA_URL", "/media/"),
            max_image_size_mb,
        };

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_url, "sqlite://petshop.db");
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.media.root, PathBuf::from("media"));
        assert_eq!(config.media.url_prefix, "/media/");
        assert_eq!(config.media.max_image_size_mb, 5.0);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
            ("MEDIA_ROOT", "/var/lib/petshop/media"),
            ("MEDIA_URL", "https://cdn.test/img/"),
            ("MAX_IMAGE_SIZE_MB", "0.5"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.media.root, PathBuf::from("/var/lib/petshop/media"));
        assert_eq!(config.media.url_prefix, "https://cdn.test/img/");
        assert_eq!(config.media.max_image_size_mb, 0.5);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn invalid_port_panics() {
        config_from(&[("PORT", "eighty")]);
    }

    #[test]
    #[should_panic(expected = "MAX_IMAGE_SIZE_MB must be greater than zero")]
    fn zero_upload_limit_panics() {
        config_from(&[("MAX_IMAGE_SIZE_MB", "0")]);
    }

    #[test]
    #[should_panic(expected = "MAX_IMAGE_SIZE_MB must be a finite number")]
    fn infinite_upload_limit_panics() {
        config_from(&[("MAX_IMAGE_SIZE_MB", "inf")]);
    }
}
