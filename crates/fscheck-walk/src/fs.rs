use crate::walker::{TreeWalker, WalkStream};
use crate::ScanError;
use fscheck_domain::{EntryInfo, PredicateSet, WalkQuery};
use fscheck_types::EntryType;
use walkdir::WalkDir;

/// In-process walker built on `walkdir`.
///
/// Mirrors `find -P`: symlinks are reported as symlinks and never followed, the root
/// included. Any traversal error (unreadable directory, missing root) ends the walk
/// with an error, as a non-zero `find` exit would.
#[derive(Clone, Debug, Default)]
pub struct FsWalker {
    _priv: (),
}

impl FsWalker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeWalker for FsWalker {
    fn name(&self) -> &str {
        "fs"
    }

    fn walk<'a>(&'a self, query: &'a WalkQuery) -> Result<WalkStream<'a>, ScanError> {
        let predicates = PredicateSet::compile(&query.predicates)?;
        let root = query.root.as_str();

        let iter = WalkDir::new(root)
            .follow_links(false)
            .follow_root_links(false)
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(source) => {
                        return Some(Err(ScanError::Walk {
                            root: root.to_string(),
                            source,
                        }));
                    }
                };

                let path = entry.path().to_string_lossy();
                let name = entry.file_name().to_string_lossy();
                let info = EntryInfo {
                    path: &path,
                    name: &name,
                    entry_type: entry_type(entry.file_type()),
                };

                predicates
                    .matches(&info)
                    .then(|| Ok(path.into_owned()))
            });

        Ok(Box::new(iter))
    }
}

fn entry_type(ft: std::fs::FileType) -> Option<EntryType> {
    if ft.is_symlink() {
        return Some(EntryType::Symlink);
    }
    if ft.is_dir() {
        return Some(EntryType::Directory);
    }
    if ft.is_file() {
        return Some(EntryType::File);
    }
    special_type(ft)
}

#[cfg(unix)]
fn special_type(ft: std::fs::FileType) -> Option<EntryType> {
    use std::os::unix::fs::FileTypeExt;

    if ft.is_block_device() {
        Some(EntryType::BlockDevice)
    } else if ft.is_char_device() {
        Some(EntryType::CharDevice)
    } else if ft.is_fifo() {
        Some(EntryType::Fifo)
    } else if ft.is_socket() {
        Some(EntryType::Socket)
    } else {
        None
    }
}

#[cfg(not(unix))]
fn special_type(_ft: std::fs::FileType) -> Option<EntryType> {
    None
}
