//! JSON Schemas for the report and config formats.

use fscheck_settings::FsCheckConfigV1;
use fscheck_types::ViolationReport;
use schemars::{schema_for, Schema};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// `fscheck.report.v1`, the `--report-out` document.
    Report,
    /// The TOML config file, as its JSON data model.
    Config,
}

pub fn generate_schema(kind: SchemaKind) -> Schema {
    match kind {
        SchemaKind::Report => schema_for!(ViolationReport),
        SchemaKind::Config => schema_for!(FsCheckConfigV1),
    }
}

/// Pretty JSON with a trailing newline.
pub fn render_schema(kind: SchemaKind) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(&generate_schema(kind))?;
    out.push('\n');
    Ok(out)
}
