//! Pure policy compilation and predicate evaluation (no IO).
//!
//! Input: allow/block rules and an optional entry-type filter.
//! Output: the shared exclusion clause (`FilterPattern`), the list of walks a scan
//! performs, and matchers that decide whether a walked entry satisfies a walk.

#![forbid(unsafe_code)]

pub mod matcher;
pub mod pattern;
pub mod policy;

#[cfg(test)]
mod proptest;

pub use matcher::{EntryInfo, PatternError, PredicateSet};
pub use pattern::{FilterPattern, Predicate, WalkQuery};
pub use policy::{Direction, Policy, PolicyBuilder, PolicyRule, RuleKind};
