//! Configuration loading integration tests
//!
//! Loads configuration the way the binary does and checks that invalid
//! configurations are refused before anything starts.

#[cfg(test)]
mod tests {
    use calculator_rs::config::{Config, LogFormat, Validate};
    use calculator_rs::core::{Calculator, HistoryClock};
    use calculator_rs::storage::{NullHistoryStore, StorageLayer};
    use calculator_rs::CalculatorError;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== Shipped Configuration ====================

    /// The sample configuration in the repository is valid
    #[tokio::test]
    async fn test_sample_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/calculator.yaml");
        let config = Config::from_file(path).await.unwrap();

        assert_eq!(config.server().port, 8000);
        assert!(config.storage().database.url.starts_with("sqlite:"));
        assert_eq!(config.history().date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.logging().format, LogFormat::Text);
    }

    // ==================== Loading ====================

    /// A full file overrides every default
    #[tokio::test]
    async fn test_full_config_file() {
        let file = write_config(
            r#"
server:
  host: "127.0.0.1"
  port: 9100
  workers: 2
  cors:
    enabled: true
    allowed_origins: ["https://calc.example.com"]
    allow_credentials: true
storage:
  database:
    enabled: false
  operation_timeout: 1
history:
  timezone: "+05:30"
  date_format: "%d.%m.%Y %H:%M"
logging:
  level: "DEBUG"
  format: "json"
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().address(), "127.0.0.1:9100");
        assert_eq!(config.server().workers, Some(2));
        assert!(!config.server().cors.allows_all_origins());
        assert!(!config.storage().database.enabled);
        assert_eq!(config.storage().operation_timeout().as_secs(), 1);
        assert_eq!(config.logging().directive(), "debug");
        assert_eq!(config.logging().format, LogFormat::Json);

        let clock = HistoryClock::new(config.history()).unwrap();
        assert_eq!(clock.now().offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    /// A disabled database keeps history in memory
    #[tokio::test]
    async fn test_disabled_database_uses_memory_store() {
        let config = Config::from_yaml("storage:\n  database:\n    enabled: false\n").unwrap();
        let calculator = Calculator::new(config).await.unwrap();

        let status = calculator.storage().health_check().await;
        assert_eq!(status.backend, "memory");
        assert!(status.healthy);
    }

    // ==================== Validation ====================

    /// Invalid values are refused with a configuration error
    #[test]
    fn test_invalid_configs_rejected() {
        let invalid = [
            "server:\n  port: 0\n",
            "server:\n  workers: 0\n",
            "storage:\n  operation_timeout: 0\n",
            "storage:\n  database:\n    max_connections: 0\n",
            "storage:\n  database:\n    url: \"\"\n",
            "storage:\n  database:\n    url: \"mysql://localhost/calc\"\n",
            "history:\n  timezone: \"Mars/Olympus\"\n",
            "history:\n  date_format: \"\"\n",
            "server:\n  cors:\n    allow_credentials: true\n",
        ];

        for yaml in invalid {
            let result = Config::from_yaml(yaml);
            assert!(
                matches!(result, Err(CalculatorError::Config(_))),
                "expected config error for {:?}, got {:?}",
                yaml,
                result
            );
        }
    }

    /// An empty URL is fine while the database is disabled
    #[test]
    fn test_disabled_database_skips_url_check() {
        let config = Config::from_yaml(
            "storage:\n  database:\n    enabled: false\n    url: \"\"\n",
        )
        .unwrap();
        assert!(config.service.validate().is_ok());
    }

    /// Unparsable YAML is a configuration error
    #[test]
    fn test_unparsable_yaml() {
        assert!(matches!(
            Config::from_yaml("server: [unclosed"),
            Err(CalculatorError::Config(_))
        ));
    }

    /// A calculator cannot be built on an invalid history configuration
    #[test]
    fn test_calculator_refuses_invalid_history_config() {
        let mut config = Config::default();
        config.service.history.date_format = "%Y-%Q".to_string();

        let storage = StorageLayer::from_store(Arc::new(NullHistoryStore));
        assert!(Calculator::with_storage(config, storage).is_err());
    }
}
