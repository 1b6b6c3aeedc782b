use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `fscheck.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FsCheckConfigV1 {
    /// Enable debug logging of every compiled rule and every walk.
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub terms: TermsConfig,

    /// Entry-type filter applied to every walk (`f`, `d`, `l`, `b`, `c`, `p`, `s`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Notification destinations; blank entries are ignored.
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Whole-path patterns that are never reported.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Whole-path patterns that are reported.
    #[serde(default)]
    pub block: Vec<String>,
    /// Roots to scan, in order.
    #[serde(default)]
    pub check: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TermsConfig {
    /// Base-name patterns that are never reported.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Base-name patterns that are reported.
    #[serde(default)]
    pub block: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// `fs` (in-process walk, default) or `find` (spawn an external find).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walker: Option<String>,

    /// Path of the find binary when `walker = "find"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_bin: Option<String>,
}
