use crate::config::{
    default_host, default_log_level, default_port, default_service_name, default_service_version,
    Config, ConfigError, ObservabilityConfig, ServerConfig,
};

#[test]
fn test_default_values() {
    assert_eq!(default_host(), "0.0.0.0");
    assert_eq!(default_port(), 5001);
    assert_eq!(default_service_name(), "catalog-rs");
    assert_eq!(default_service_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(default_log_level(), "info");
}

#[test]
fn test_validate_rejects_port_zero() {
    let config = Config {
        server: ServerConfig {
            host: default_host(),
            port: 0,
        },
        observability: ObservabilityConfig {
            service_name: default_service_name(),
            service_version: default_service_version(),
            otlp_endpoint: None,
            log_level: default_log_level(),
            enable_json_logging: false,
        },
    };

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_validate_rejects_empty_service_name() {
    let config = Config {
        server: ServerConfig {
            host: default_host(),
            port: default_port(),
        },
        observability: ObservabilityConfig {
            service_name: String::new(),
            service_version: default_service_version(),
            otlp_endpoint: None,
            log_level: default_log_level(),
            enable_json_logging: false,
        },
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::LoadError {
        message: "bad source".to_string(),
    };
    assert_eq!(error.to_string(), "Configuration loading error: bad source");

    let error = ConfigError::ValidationError {
        message: "Server port cannot be 0".to_string(),
    };
    assert_eq!(error.to_string(), "Validation error: Server port cannot be 0");
}
