//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - FilterPattern composition order and determinism
//! - Walk planning (one walk per block rule, type-only fallback)
//! - Allow exclusions always winning over block triggers

use crate::matcher::{EntryInfo, PredicateSet};
use crate::pattern::Predicate;
use crate::policy::PolicyBuilder;
use fscheck_types::EntryType;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Simple glob-safe segments; rule text never needs escaping.
fn arb_glob() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\*?[a-z][a-z0-9_.-]{0,8}\\*?").unwrap()
}

fn arb_globs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_glob(), 0..5)
}

fn arb_type() -> impl Strategy<Value = Option<EntryType>> {
    prop::option::of(prop::sample::select(EntryType::ALL.to_vec()))
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.-]{0,8}").unwrap()
}

fn builder(
    allow_paths: &[String],
    allow_terms: &[String],
    block_paths: &[String],
    block_terms: &[String],
    entry_type: Option<EntryType>,
) -> PolicyBuilder {
    let mut b = PolicyBuilder::new();
    b.add_allow_paths(allow_paths.iter().cloned())
        .add_allow_terms(allow_terms.iter().cloned())
        .add_block_paths(block_paths.iter().cloned())
        .add_block_terms(block_terms.iter().cloned());
    if let Some(t) = entry_type {
        b.set_entry_type(t);
    }
    b
}

proptest! {
    #[test]
    fn pattern_is_type_then_allow_paths_then_allow_terms(
        allow_paths in arb_globs(),
        allow_terms in arb_globs(),
        block_paths in arb_globs(),
        block_terms in arb_globs(),
        entry_type in arb_type(),
    ) {
        let b = builder(&allow_paths, &allow_terms, &block_paths, &block_terms, entry_type);
        let pattern = b.pattern();

        let mut expected = Vec::new();
        if let Some(t) = entry_type {
            expected.push(Predicate::Type(t.tag().to_string()));
        }
        expected.extend(allow_paths.iter().cloned().map(Predicate::ExcludePath));
        expected.extend(allow_terms.iter().cloned().map(Predicate::ExcludeName));

        prop_assert_eq!(pattern.predicates(), expected.as_slice());
        prop_assert!(pattern.predicates().iter().all(Predicate::is_exclusion));
        prop_assert_eq!(pattern, b.pattern());
    }

    #[test]
    fn walk_plan_has_one_walk_per_block_rule(
        allow_paths in arb_globs(),
        block_paths in arb_globs(),
        block_terms in arb_globs(),
        entry_type in arb_type(),
    ) {
        let policy = builder(&allow_paths, &[], &block_paths, &block_terms, entry_type).build();
        let plan = policy.walk_plan("/data");

        let block_count = block_paths.len() + block_terms.len();
        let expected = match (block_count, entry_type) {
            (0, Some(_)) => 1,
            (n, _) => n,
        };
        prop_assert_eq!(plan.len(), expected);

        for q in &plan {
            prop_assert_eq!(&q.predicates[..policy.pattern().len()], policy.pattern().predicates());
            prop_assert!(q.predicates.len() <= policy.pattern().len() + 1);
        }
    }

    #[test]
    fn allowed_names_are_never_matched(
        allowed in arb_name(),
        block_terms in arb_globs(),
    ) {
        let mut b = PolicyBuilder::new();
        b.add_allow_terms([allowed.clone()])
            .add_block_terms(block_terms.iter().cloned())
            .add_block_terms(["*"]);
        let path = format!("/data/{allowed}");
        let entry = EntryInfo {
            path: &path,
            name: &allowed,
            entry_type: Some(EntryType::File),
        };

        for q in b.build().walk_plan("/data") {
            let set = PredicateSet::compile(&q.predicates).unwrap();
            prop_assert!(!set.matches(&entry));
        }
    }
}
