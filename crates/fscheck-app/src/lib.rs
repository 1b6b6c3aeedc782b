//! Use case orchestration for fscheck.
//!
//! This crate provides the application layer: it drives the scanner over every check
//! root, forwards the outcome to the notifier, and builds the JSON report. It is
//! intentionally thin and delegates walking to `fscheck-walk`.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod notify;
mod plan;
mod report;
mod schema;

pub use check::{
    run, run_check, outcome_exit_code, summary_message, CheckError, CheckOutput, RootResult,
    RunInput, RunOutcome,
};
pub use notify::{notify_all, Delivery, Notifier, NotifyError, WebhookNotifier};
pub use plan::{describe_plan, describe_rules, PlannedWalk};
pub use report::{build_report, serialize_report, write_report};
pub use schema::{generate_schema, render_schema, SchemaKind};
