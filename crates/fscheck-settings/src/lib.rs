//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{FsCheckConfigV1, NotifyConfig, PathsConfig, ScanConfig, TermsConfig};
pub use resolve::{ConfigError, ResolvedConfig, ScanSettings, WalkerKind, DEFAULT_FIND_BIN};

/// Parse `fscheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<FsCheckConfigV1, ConfigError> {
    toml::from_str(input).map_err(|e| ConfigError::Parse(Box::new(e)))
}

/// Validate the config and build the effective policy and run settings.
pub fn resolve_config(cfg: FsCheckConfigV1) -> Result<ResolvedConfig, ConfigError> {
    resolve::resolve_config(cfg)
}
