use std::fmt;

use crate::EntryType;
use crate::path;

/// A path together with the kind of the entry it names.
///
/// The kind cannot be inferred from the string, so it travels alongside. All accessors borrow
/// from the stored path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileInfo {
    path: String,
    entry_type: EntryType,
}

impl FileInfo {
    pub fn new<P: Into<String>>(path: P, entry_type: EntryType) -> FileInfo {
        FileInfo {
            path: path.into(),
            entry_type,
        }
    }

    pub fn full_path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        path::name(&self.path)
    }

    pub fn directory(&self) -> &str {
        path::directory(&self.path)
    }

    pub fn ext(&self) -> &str {
        path::extension(&self.path)
    }

    pub fn base_name(&self) -> &str {
        path::base_name(&self.path)
    }

    pub fn depth(&self) -> usize {
        path::depth(&self.path)
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
