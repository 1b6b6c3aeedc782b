use crate::pattern::{FilterPattern, Predicate, WalkQuery};
use fscheck_types::EntryType;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Matched against the whole path.
    Path,
    /// Matched against the base name.
    Term,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Allow,
    Block,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyRule {
    pub kind: RuleKind,
    pub direction: Direction,
    pub value: String,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleKind::Path => "path",
            RuleKind::Term => "term",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Allow => "allow",
            Direction::Block => "block",
        })
    }
}

/// Renders as `<direction> <kind> <value>`, e.g. `block term *.tmp`.
impl fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.direction, self.kind, self.value)
    }
}

/// Accumulates allow/block rules before they are frozen into a [`Policy`].
///
/// Rules keep insertion order within each kind/direction and are never deduplicated.
#[derive(Clone, Debug, Default)]
pub struct PolicyBuilder {
    allow_paths: Vec<String>,
    allow_terms: Vec<String>,
    block_paths: Vec<String>,
    block_terms: Vec<String>,
    entry_type: Option<String>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_allow_paths<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_paths.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn add_allow_terms<I, S>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn add_block_paths<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_paths.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn add_block_terms<I, S>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Set or overwrite the entry-type filter. An empty string leaves it unchanged.
    pub fn set_type(&mut self, entry_type: &str) -> &mut Self {
        if !entry_type.is_empty() {
            self.entry_type = Some(entry_type.to_string());
        }
        self
    }

    pub fn set_entry_type(&mut self, entry_type: EntryType) -> &mut Self {
        self.entry_type = Some(entry_type.tag().to_string());
        self
    }

    /// Compile the current rules into the shared exclusion clause.
    ///
    /// Order: type filter, allow paths, allow terms. Block rules never appear here.
    pub fn pattern(&self) -> FilterPattern {
        let mut predicates = Vec::with_capacity(
            usize::from(self.entry_type.is_some()) + self.allow_paths.len() + self.allow_terms.len(),
        );

        if let Some(t) = &self.entry_type {
            predicates.push(Predicate::Type(t.clone()));
        }
        for path in &self.allow_paths {
            predicates.push(Predicate::ExcludePath(path.clone()));
        }
        for term in &self.allow_terms {
            predicates.push(Predicate::ExcludeName(term.clone()));
        }

        FilterPattern::from_predicates(predicates)
    }

    pub fn build(&self) -> Policy {
        Policy {
            pattern: self.pattern(),
            allow_paths: self.allow_paths.clone(),
            allow_terms: self.allow_terms.clone(),
            block_paths: self.block_paths.clone(),
            block_terms: self.block_terms.clone(),
            entry_type: self.entry_type.clone(),
        }
    }
}

/// Immutable, compiled policy shared read-only by every scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pattern: FilterPattern,
    allow_paths: Vec<String>,
    allow_terms: Vec<String>,
    block_paths: Vec<String>,
    block_terms: Vec<String>,
    entry_type: Option<String>,
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    pub fn pattern(&self) -> &FilterPattern {
        &self.pattern
    }

    pub fn block_paths(&self) -> &[String] {
        &self.block_paths
    }

    pub fn block_terms(&self) -> &[String] {
        &self.block_terms
    }

    pub fn entry_type(&self) -> Option<&str> {
        self.entry_type.as_deref()
    }

    pub fn has_block_rules(&self) -> bool {
        !self.block_paths.is_empty() || !self.block_terms.is_empty()
    }

    /// All rules, allow before block, paths before terms, each in insertion order.
    pub fn rules(&self) -> Vec<PolicyRule> {
        let groups = [
            (RuleKind::Path, Direction::Allow, &self.allow_paths),
            (RuleKind::Term, Direction::Allow, &self.allow_terms),
            (RuleKind::Path, Direction::Block, &self.block_paths),
            (RuleKind::Term, Direction::Block, &self.block_terms),
        ];
        groups
            .into_iter()
            .flat_map(|(kind, direction, values)| {
                values.iter().map(move |value| PolicyRule {
                    kind,
                    direction,
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// The walks a scan of `root` performs, in execution order.
    ///
    /// One walk per block-path rule, then one per block-term rule. With no block rules
    /// at all, a type filter on its own defines the violations and yields a single walk
    /// over the exclusion clause; without a type filter either, nothing is walked.
    pub fn walk_plan(&self, root: &str) -> Vec<WalkQuery> {
        let mut plan = Vec::with_capacity(self.block_paths.len() + self.block_terms.len());

        for path in &self.block_paths {
            plan.push(WalkQuery::new(
                root,
                &self.pattern,
                Some(Predicate::MatchPath(path.clone())),
            ));
        }
        for term in &self.block_terms {
            plan.push(WalkQuery::new(
                root,
                &self.pattern,
                Some(Predicate::MatchName(term.clone())),
            ));
        }

        if !self.has_block_rules() && self.entry_type.is_some() {
            plan.push(WalkQuery::new(root, &self.pattern, None));
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn pattern_orders_type_then_allow_paths_then_allow_terms() {
        let mut b = PolicyBuilder::new();
        b.add_allow_terms(["*.keep"])
            .add_allow_paths(["*/tmp/*", "*/cache/*"])
            .set_type("f");

        assert_eq!(
            b.pattern().to_args(),
            s(&[
                "-type",
                "f",
                "-not",
                "-iwholename",
                "*/tmp/*",
                "-not",
                "-iwholename",
                "*/cache/*",
                "-not",
                "-iname",
                "*.keep",
            ])
        );
    }

    #[test]
    fn block_rules_never_enter_the_pattern() {
        let mut b = PolicyBuilder::new();
        b.add_block_paths(["*/secrets/*"]).add_block_terms(["*.tmp"]);
        assert!(b.pattern().is_empty());
    }

    #[test]
    fn empty_inputs_are_noops() {
        let mut b = PolicyBuilder::new();
        b.add_allow_paths(Vec::<String>::new())
            .add_allow_terms(Vec::<String>::new())
            .add_block_paths(Vec::<String>::new())
            .add_block_terms(Vec::<String>::new())
            .set_type("");
        assert_eq!(b.build(), Policy::default());
    }

    #[test]
    fn empty_type_does_not_clear_existing_filter() {
        let mut b = PolicyBuilder::new();
        b.set_type("d").set_type("");
        assert_eq!(b.build().entry_type(), Some("d"));

        b.set_type("l");
        assert_eq!(b.build().entry_type(), Some("l"));
    }

    #[test]
    fn duplicate_rules_are_kept() {
        let mut b = PolicyBuilder::new();
        b.add_allow_terms(["*.keep", "*.keep"]);
        assert_eq!(b.pattern().len(), 2);
    }

    #[test]
    fn built_policy_is_unaffected_by_later_rules() {
        let mut b = PolicyBuilder::new();
        b.add_block_terms(["*.tmp"]);
        let policy = b.build();

        b.add_allow_paths(["*/tmp/*"]).add_block_terms(["*.bak"]);

        assert!(policy.pattern().is_empty());
        assert_eq!(policy.block_terms(), ["*.tmp"]);
        assert_eq!(b.build().block_terms(), ["*.tmp", "*.bak"]);
    }

    #[test]
    fn walk_plan_runs_block_paths_before_block_terms() {
        let mut b = PolicyBuilder::new();
        b.add_block_terms(["*.tmp"])
            .add_block_paths(["*/secrets/*"])
            .add_allow_paths(["*/tmp/*"]);
        let plan = b.build().walk_plan("/data");

        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan[0].trigger(),
            Some(&Predicate::MatchPath("*/secrets/*".into()))
        );
        assert_eq!(plan[1].trigger(), Some(&Predicate::MatchName("*.tmp".into())));
        for q in &plan {
            assert_eq!(q.root, "/data");
            assert_eq!(q.predicates[0], Predicate::ExcludePath("*/tmp/*".into()));
        }
    }

    // The type filter alone defines violations when no block rule exists.
    #[test]
    fn walk_plan_type_only_fallback_is_intentional() {
        let mut b = PolicyBuilder::new();
        b.set_type("l").add_allow_terms(["ok-*"]);
        let plan = b.build().walk_plan("/data");

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].trigger(), None);
        assert_eq!(plan[0].to_string(), "/data -type l -not -iname ok-*");
    }

    #[test]
    fn walk_plan_no_fallback_when_block_rules_exist() {
        let mut b = PolicyBuilder::new();
        b.set_type("f").add_block_terms(["*.tmp"]);
        assert_eq!(b.build().walk_plan("/data").len(), 1);
    }

    #[test]
    fn walk_plan_empty_without_block_rules_or_type() {
        let mut b = PolicyBuilder::new();
        b.add_allow_paths(["*"]);
        assert!(b.build().walk_plan("/data").is_empty());
    }

    #[test]
    fn rules_lists_allow_before_block() {
        let mut b = PolicyBuilder::new();
        b.add_block_terms(["*.tmp"]).add_allow_paths(["*/tmp/*"]);
        let rules = b.build().rules();
        assert_eq!(rules[0].direction, Direction::Allow);
        assert_eq!(rules[0].kind, RuleKind::Path);
        assert_eq!(rules[1].direction, Direction::Block);
        assert_eq!(rules[1].kind, RuleKind::Term);
        assert_eq!(rules[0].to_string(), "allow path */tmp/*");
        assert_eq!(rules[1].to_string(), "block term *.tmp");
    }
}
