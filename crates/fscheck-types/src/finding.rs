use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One violating path as emitted by a tree walk.
///
/// Identity is the literal path text: no normalization is applied beyond what the
/// walker itself produces, so `/data/x` and `/data//x` are distinct findings.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Finding(String);

impl Finding {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Finding {
    fn from(value: String) -> Self {
        Finding(value)
    }
}

impl From<&str> for Finding {
    fn from(value: &str) -> Self {
        Finding(value.to_string())
    }
}
