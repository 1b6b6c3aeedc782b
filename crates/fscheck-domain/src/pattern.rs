//! Predicate tokens and the compiled exclusion clause.
//!
//! The vocabulary is deliberately the `find` one so a walk can be rendered as an
//! argument vector and handed to an external `find` unchanged.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `-type <t>`
    Type(String),
    /// `-not -iwholename <pattern>`
    ExcludePath(String),
    /// `-not -iname <term>`
    ExcludeName(String),
    /// `-iwholename <pattern>`
    MatchPath(String),
    /// `-iname <term>`
    MatchName(String),
}

impl Predicate {
    pub fn is_exclusion(&self) -> bool {
        matches!(
            self,
            Predicate::Type(_) | Predicate::ExcludePath(_) | Predicate::ExcludeName(_)
        )
    }

    pub fn push_args(&self, out: &mut Vec<String>) {
        match self {
            Predicate::Type(t) => {
                out.push("-type".to_string());
                out.push(t.clone());
            }
            Predicate::ExcludePath(p) => {
                out.push("-not".to_string());
                out.push("-iwholename".to_string());
                out.push(p.clone());
            }
            Predicate::ExcludeName(t) => {
                out.push("-not".to_string());
                out.push("-iname".to_string());
                out.push(t.clone());
            }
            Predicate::MatchPath(p) => {
                out.push("-iwholename".to_string());
                out.push(p.clone());
            }
            Predicate::MatchName(t) => {
                out.push("-iname".to_string());
                out.push(t.clone());
            }
        }
    }
}

/// Ordered exclusion clause shared by every walk of a scan.
///
/// Built only from allow rules and the type filter; never holds a match predicate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPattern(Vec<Predicate>);

impl FilterPattern {
    pub(crate) fn from_predicates(predicates: Vec<Predicate>) -> Self {
        debug_assert!(predicates.iter().all(Predicate::is_exclusion));
        Self(predicates)
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut out = Vec::new();
        for p in &self.0 {
            p.push_args(&mut out);
        }
        out
    }
}

/// One tree walk: a root, the shared exclusion clause and at most one block trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkQuery {
    pub root: String,
    pub predicates: Vec<Predicate>,
}

impl WalkQuery {
    pub fn new(root: impl Into<String>, filter: &FilterPattern, trigger: Option<Predicate>) -> Self {
        let mut predicates = filter.predicates().to_vec();
        predicates.extend(trigger);
        Self {
            root: root.into(),
            predicates,
        }
    }

    /// The block predicate this walk looks for, if any.
    pub fn trigger(&self) -> Option<&Predicate> {
        self.predicates.last().filter(|p| !p.is_exclusion())
    }

    /// `find` argument vector: the root followed by every predicate.
    pub fn to_find_args(&self) -> Vec<String> {
        let mut out = vec![self.root.clone()];
        for p in &self.predicates {
            p.push_args(&mut out);
        }
        out
    }
}

impl fmt::Display for WalkQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_find_args().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_query_renders_find_arguments_in_order() {
        let filter = FilterPattern::from_predicates(vec![
            Predicate::Type("f".to_string()),
            Predicate::ExcludePath("*/tmp/*".to_string()),
            Predicate::ExcludeName("*.keep".to_string()),
        ]);
        let query = WalkQuery::new("/data", &filter, Some(Predicate::MatchName("*.tmp".into())));

        assert_eq!(
            query.to_find_args(),
            vec![
                "/data",
                "-type",
                "f",
                "-not",
                "-iwholename",
                "*/tmp/*",
                "-not",
                "-iname",
                "*.keep",
                "-iname",
                "*.tmp",
            ]
        );
        assert_eq!(query.trigger(), Some(&Predicate::MatchName("*.tmp".into())));
    }

    #[test]
    fn walk_without_trigger_has_only_exclusions() {
        let filter = FilterPattern::from_predicates(vec![Predicate::Type("l".to_string())]);
        let query = WalkQuery::new("/data", &filter, None);
        assert_eq!(query.trigger(), None);
        assert_eq!(query.to_string(), "/data -type l");
    }
}
