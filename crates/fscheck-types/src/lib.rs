//! Stable DTOs used across the fscheck workspace.
//!
//! This crate is intentionally boring:
//! - the `Finding` path type reported for every violation
//! - the entry-type vocabulary shared by the policy and the walkers
//! - the JSON violation report envelope

#![forbid(unsafe_code)]

pub mod entry;
pub mod finding;
pub mod receipt;

pub use entry::{EntryType, UnknownEntryType};
pub use finding::Finding;
pub use receipt::{SCHEMA_REPORT_V1, ToolMeta, Verdict, ViolationData, ViolationReport};
