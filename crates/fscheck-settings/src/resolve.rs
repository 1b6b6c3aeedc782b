use crate::model::FsCheckConfigV1;
use camino::Utf8PathBuf;
use fscheck_domain::matcher::compile_glob;
use fscheck_domain::{Policy, PolicyBuilder};
use fscheck_types::EntryType;

pub const DEFAULT_FIND_BIN: &str = "/usr/bin/find";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to parse configuration")]
    Parse(#[source] Box<toml::de::Error>),
    #[error("invalid {field} pattern: {pattern}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: fscheck_domain::PatternError,
    },
    #[error("invalid type: {0}")]
    InvalidType(#[from] fscheck_types::UnknownEntryType),
    #[error("unknown walker: {0} (expected 'fs' or 'find')")]
    InvalidWalker(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkerKind {
    #[default]
    Fs,
    Find,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanSettings {
    pub walker: WalkerKind,
    pub find_bin: Utf8PathBuf,
}

impl std::str::FromStr for WalkerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fs" => Ok(WalkerKind::Fs),
            "find" => Ok(WalkerKind::Find),
            other => Err(ConfigError::InvalidWalker(other.to_string())),
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            walker: WalkerKind::Fs,
            find_bin: Utf8PathBuf::from(DEFAULT_FIND_BIN),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub debug: bool,
    pub policy: Policy,
    pub check_roots: Vec<Utf8PathBuf>,
    pub destinations: Vec<String>,
    pub scan: ScanSettings,
}

pub fn resolve_config(cfg: FsCheckConfigV1) -> Result<ResolvedConfig, ConfigError> {
    validate_patterns("paths.allow", &cfg.paths.allow)?;
    validate_patterns("terms.allow", &cfg.terms.allow)?;
    validate_patterns("paths.block", &cfg.paths.block)?;
    validate_patterns("terms.block", &cfg.terms.block)?;

    let entry_type = cfg.entry_type.as_deref().unwrap_or("");
    if !entry_type.is_empty() {
        entry_type.parse::<EntryType>()?;
    }

    let mut builder = PolicyBuilder::new();
    builder
        .add_allow_paths(cfg.paths.allow)
        .add_allow_terms(cfg.terms.allow)
        .add_block_paths(cfg.paths.block)
        .add_block_terms(cfg.terms.block)
        .set_type(entry_type);

    let scan = ScanSettings {
        walker: match cfg.scan.walker.as_deref() {
            Some(w) => w.parse()?,
            None => WalkerKind::default(),
        },
        find_bin: cfg
            .scan
            .find_bin
            .map(Utf8PathBuf::from)
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_FIND_BIN)),
    };

    Ok(ResolvedConfig {
        debug: cfg.debug,
        policy: builder.build(),
        check_roots: cfg.paths.check.into_iter().map(Utf8PathBuf::from).collect(),
        destinations: cfg.notify.urls,
        scan,
    })
}

fn validate_patterns(field: &'static str, patterns: &[String]) -> Result<(), ConfigError> {
    for pattern in patterns {
        compile_glob(pattern).map_err(|source| ConfigError::InvalidPattern {
            field,
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}
