//! In-process evaluation of a walk's predicates against one entry.
//!
//! Globs follow `find -iwholename`/`-iname`: case-insensitive, and `*`/`?` match `/`.

use crate::pattern::Predicate;
use fscheck_types::EntryType;
use globset::{GlobBuilder, GlobMatcher};

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid glob {pattern:?}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("unknown entry type {0:?} (expected one of f, d, l, b, c, p, s)")]
    UnknownType(String),
}

/// What a walker knows about one entry.
#[derive(Clone, Copy, Debug)]
pub struct EntryInfo<'a> {
    /// Path as the walker emits it (root joined with the relative path).
    pub path: &'a str,
    /// Base name; for the root itself this is the last root component.
    pub name: &'a str,
    pub entry_type: Option<EntryType>,
}

#[derive(Clone, Debug)]
enum Compiled {
    Type(EntryType),
    Path { glob: GlobMatcher, negate: bool },
    Name { glob: GlobMatcher, negate: bool },
}

/// A conjunction of compiled predicates.
#[derive(Clone, Debug, Default)]
pub struct PredicateSet {
    compiled: Vec<Compiled>,
}

impl PredicateSet {
    pub fn compile(predicates: &[Predicate]) -> Result<Self, PatternError> {
        let compiled = predicates
            .iter()
            .map(|p| {
                Ok(match p {
                    Predicate::Type(t) => Compiled::Type(
                        t.parse()
                            .map_err(|_| PatternError::UnknownType(t.clone()))?,
                    ),
                    Predicate::ExcludePath(g) => Compiled::Path {
                        glob: compile_glob(g)?,
                        negate: true,
                    },
                    Predicate::MatchPath(g) => Compiled::Path {
                        glob: compile_glob(g)?,
                        negate: false,
                    },
                    Predicate::ExcludeName(g) => Compiled::Name {
                        glob: compile_glob(g)?,
                        negate: true,
                    },
                    Predicate::MatchName(g) => Compiled::Name {
                        glob: compile_glob(g)?,
                        negate: false,
                    },
                })
            })
            .collect::<Result<Vec<_>, PatternError>>()?;

        Ok(Self { compiled })
    }

    pub fn matches(&self, entry: &EntryInfo<'_>) -> bool {
        self.compiled.iter().all(|c| match c {
            Compiled::Type(t) => entry.entry_type == Some(*t),
            Compiled::Path { glob, negate } => glob.is_match(entry.path) != *negate,
            Compiled::Name { glob, negate } => glob.is_match(entry.name) != *negate,
        })
    }
}

/// Compile one rule glob.
///
/// `find` treats a bracket or brace it cannot parse as a literal character, so a
/// pattern rejected by `globset` is retried with those escaped, then fully literal.
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher, PatternError> {
    build_glob(pattern)
        .or_else(|_| build_glob(&escape_groups(pattern)))
        .or_else(|_| build_glob(&globset::escape(pattern)))
        .map_err(|source| PatternError::Glob {
            pattern: pattern.to_string(),
            source,
        })
}

fn build_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(false)
        .backslash_escape(true)
        .build()
        .map(|g| g.compile_matcher())
}

/// Escape `[`, `]`, `{` and `}`; `*`, `?` and existing escapes are kept.
fn escape_groups(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' | ']' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
