//! Shared domain types and configuration for the SKU lookup workspace.

pub mod app_config;
pub mod attributes;
pub mod config;
pub mod extraction;
pub mod identifier;

use thiserror::Error;

pub use app_config::AppConfig;
pub use attributes::{AttributeMap, AttributeValue};
pub use config::{load_app_config, load_app_config_from_env};
pub use extraction::{ExtractionResult, Source, NOT_AVAILABLE};
pub use identifier::Identifier;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid identifier \"{input}\": {reason}")]
    InvalidIdentifier { input: String, reason: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
