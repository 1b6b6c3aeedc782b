use crate::walker::TreeWalker;
use crate::ScanError;
use fscheck_domain::{Policy, Predicate, WalkQuery};
use fscheck_types::Finding;
use std::collections::BTreeSet;
use tracing::{debug, Span};

/// Runs a policy's walks against one root at a time and merges the results.
pub struct Scanner<W> {
    policy: Policy,
    walker: W,
    span: Span,
}

impl<W: TreeWalker> Scanner<W> {
    pub fn new(policy: Policy, walker: W) -> Self {
        Self {
            policy,
            walker,
            span: Span::none(),
        }
    }

    /// Emit this scanner's events under `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn walker(&self) -> &W {
        &self.walker
    }

    /// Unique violations under `root`, sorted.
    ///
    /// Walks run one after another in plan order. The first failing walk aborts the
    /// check; nothing collected before it is returned.
    pub fn check(&self, root: &str) -> Result<Vec<Finding>, ScanError> {
        let _guard = self.span.enter();
        let mut unique = BTreeSet::new();

        for query in self.policy.walk_plan(root) {
            match query.trigger() {
                Some(Predicate::MatchPath(p)) => debug!(root, rule = %p, "blocking path"),
                Some(Predicate::MatchName(t)) => debug!(root, rule = %t, "blocking term"),
                _ => debug!(root, entry_type = ?self.policy.entry_type(), "type-only check"),
            }
            self.run_walk(&query, &mut unique)?;
        }

        Ok(unique.into_iter().collect())
    }

    fn run_walk(&self, query: &WalkQuery, unique: &mut BTreeSet<Finding>) -> Result<(), ScanError> {
        debug!(walker = self.walker.name(), args = %query, "running walk");

        let mut matched = 0usize;
        for path in self.walker.walk(query)? {
            let path = path?;
            if unique.insert(Finding::new(path)) {
                matched += 1;
            }
        }

        debug!(new_findings = matched, total = unique.len(), "walk finished");
        Ok(())
    }
}
