//! # Config
//!
//! Define and implement config options for module

use config::{ConfigError, Environment};
use dotenv::dotenv;
use gobgp_client_grpc::TransportSecurity;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// port of the gobgp gRPC API
    pub gobgp_port_grpc: u16,
    /// transport security used to reach gobgp
    pub transport_security: TransportSecurity,
    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(Config Default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            gobgp_port_grpc: 50051,
            transport_security: TransportSecurity::None,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::new();

        config::Config::builder()
            .set_default("gobgp_port_grpc", default_config.gobgp_port_grpc)?
            .set_default("transport_security", "none")?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_default() {
        let config = Config::default();

        assert_eq!(config.gobgp_port_grpc, 50051);
        assert_eq!(config.transport_security, TransportSecurity::None);
        assert_eq!(config.log_config, String::from("log4rs.yaml"));
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("GOBGP_PORT_GRPC", "6789");
        std::env::set_var("TRANSPORT_SECURITY", "tls");
        std::env::set_var("LOG_CONFIG", "config_file.yaml");

        let config = Config::try_from_env();
        assert!(config.is_ok());
        let config = config.unwrap();

        assert_eq!(config.gobgp_port_grpc, 6789);
        assert_eq!(config.transport_security, TransportSecurity::Tls);
        assert_eq!(config.log_config, String::from("config_file.yaml"));

        // Values are case sensitive and never replaced by defaults.
        std::env::set_var("TRANSPORT_SECURITY", "TLS");
        assert!(Config::try_from_env().is_err());
        std::env::set_var("TRANSPORT_SECURITY", "tls");
        std::env::set_var("GOBGP_PORT_GRPC", "notaport");
        assert!(Config::try_from_env().is_err());

        std::env::remove_var("GOBGP_PORT_GRPC");
        std::env::remove_var("TRANSPORT_SECURITY");
        std::env::remove_var("LOG_CONFIG");
    }
}
