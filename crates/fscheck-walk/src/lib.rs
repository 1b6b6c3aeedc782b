//! Walk adapters: evaluate walk queries against the filesystem and merge the results.
//!
//! This crate does filesystem IO and may spawn an external `find`. Policy compilation
//! lives in `fscheck-domain`; this crate only executes the walks it plans.

#![forbid(unsafe_code)]

mod error;
mod find;
mod fs;
mod scanner;
mod walker;

pub use error::ScanError;
pub use find::FindWalker;
pub use fs::FsWalker;
pub use scanner::Scanner;
pub use walker::{TreeWalker, WalkStream};
