//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AuditConfig, AuditQueueBackend, ConfigError, DatabaseConfig,
    Environment, RedisConfig, SnowflakeConfig,
};
