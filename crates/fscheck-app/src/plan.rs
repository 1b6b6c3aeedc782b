//! The `pattern` use case: show the walks a check would perform, as `find` invocations.

use camino::Utf8PathBuf;
use fscheck_domain::Policy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedWalk {
    pub root: Utf8PathBuf,
    pub args: Vec<String>,
}

/// Every compiled rule as `<direction> <kind> <value>`, then the type filter if set.
pub fn describe_rules(policy: &Policy) -> Vec<String> {
    let mut out: Vec<String> = policy.rules().iter().map(ToString::to_string).collect();
    if let Some(t) = policy.entry_type() {
        out.push(format!("type {t}"));
    }
    out
}

pub fn describe_plan(policy: &Policy, roots: &[Utf8PathBuf]) -> Vec<PlannedWalk> {
    roots
        .iter()
        .flat_map(|root| {
            policy
                .walk_plan(root.as_str())
                .into_iter()
                .map(move |q| PlannedWalk {
                    root: root.clone(),
                    args: q.to_find_args(),
                })
        })
        .collect()
}
