//! Partitioned, content-addressed directory tree keyed by hex identifier.

mod error;

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::StoreError;

use crate::codec::{Identifier, Side};

const HANDLER_DIR: &str = ".handlers";
const QUEUE_DIR: &str = ".queue";
const PARTITION_GROUP_LEN: usize = 8;
const PARTITION_GROUPS: usize = 6;

/// The root of a `<store>` tree: `<store>/<colour>/<handler-dir>/<p0>/.../<hex>.raw`.
///
/// Holds a per-run directory-existence cache as a plain I/O optimisation —
/// it is scoped to one `Store` instance, never shared process-wide, per the
/// "no global state" design note.
pub struct Store {
    root: PathBuf,
    known_dirs: RefCell<HashSet<PathBuf>>,
}

impl Store {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Store {
        Store {
            root: root.into(),
            known_dirs: RefCell::new(HashSet::new()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn queue_dir(&self, side: Side) -> PathBuf {
        self.root.join(side.dir_name()).join(QUEUE_DIR)
    }

    /// The leaf path for a position's move-table file under `side`'s
    /// partition: six 8-char groups of the hex identifier as directories,
    /// the full 64-char hex plus `.raw` as the filename. The trailing 16
    /// hex characters are never used as directory components.
    #[must_use]
    pub fn path_for(&self, side: Side, identifier: &Identifier) -> PathBuf {
        let hex = identifier.to_hex();
        let mut path = self.root.join(side.dir_name()).join(HANDLER_DIR);
        for group in 0..PARTITION_GROUPS {
            let start = group * PARTITION_GROUP_LEN;
            path.push(&hex[start..start + PARTITION_GROUP_LEN]);
        }
        path.push(format!("{hex}.raw"));
        path
    }

    #[must_use]
    pub fn exists(&self, side: Side, identifier: &Identifier) -> bool {
        self.path_for(side, identifier).is_file()
    }

    /// Ensure the parent directory of `path` exists, consulting and
    /// updating the per-run cache before touching the filesystem.
    pub fn ensure_parent_dir(&self, path: &Path) -> Result<(), StoreError> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        if self.known_dirs.borrow().contains(parent) {
            return Ok(());
        }
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
        self.known_dirs.borrow_mut().insert(parent.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Board;

    #[test]
    fn partitions_six_groups_of_eight() {
        let store = Store::new("/tmp/does-not-matter");
        let id = Board::from_matrix([[crate::codec::Cell::Void; 8]; 8]).to_identifier();
        let path = store.path_for(Side::Light, &id);
        let hex = id.to_hex();
        let expected = PathBuf::from("/tmp/does-not-matter")
            .join("light")
            .join(".handlers")
            .join(&hex[0..8])
            .join(&hex[8..16])
            .join(&hex[16..24])
            .join(&hex[24..32])
            .join(&hex[32..40])
            .join(&hex[40..48])
            .join(format!("{hex}.raw"));
        assert_eq!(path, expected);
    }
}
