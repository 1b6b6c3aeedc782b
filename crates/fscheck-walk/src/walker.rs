use crate::ScanError;
use fscheck_domain::WalkQuery;

/// Lazy, finite, non-restartable stream of matching paths.
pub type WalkStream<'a> = Box<dyn Iterator<Item = Result<String, ScanError>> + 'a>;

/// The scan primitive: one traversal of `query.root` constrained by `query.predicates`.
///
/// Any item may be an error; callers stop consuming at the first one.
pub trait TreeWalker {
    fn name(&self) -> &str;

    fn walk<'a>(&'a self, query: &'a WalkQuery) -> Result<WalkStream<'a>, ScanError>;
}

impl<T: TreeWalker + ?Sized> TreeWalker for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn walk<'a>(&'a self, query: &'a WalkQuery) -> Result<WalkStream<'a>, ScanError> {
        (**self).walk(query)
    }
}

impl<T: TreeWalker + ?Sized> TreeWalker for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn walk<'a>(&'a self, query: &'a WalkQuery) -> Result<WalkStream<'a>, ScanError> {
        (**self).walk(query)
    }
}
