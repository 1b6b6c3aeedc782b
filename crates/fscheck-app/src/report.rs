//! Report building and serialization.

use crate::check::CheckOutput;
use anyhow::Context;
use camino::Utf8Path;
use fscheck_types::{SCHEMA_REPORT_V1, ToolMeta, Verdict, ViolationData, ViolationReport};

pub fn build_report(output: &CheckOutput) -> ViolationReport {
    let violations: Vec<_> = output.violations().cloned().collect();

    ViolationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "fscheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: output.started_at,
        finished_at: output.finished_at,
        verdict: Verdict::from_violations(violations.len()),
        data: ViolationData {
            roots: output.roots.iter().map(|r| r.root.to_string()).collect(),
            walks: output.walk_count() as u32,
            violations_total: violations.len() as u32,
        },
        violations,
    }
}

pub fn serialize_report(report: &ViolationReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn write_report(path: &Utf8Path, report: &ViolationReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}
