#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntryType {
    File,
    Directory,
}

/// A node of the tree. Its identity is the path it is stored under; the kind never changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entry {
    entry_type: EntryType,
}

impl Entry {
    pub fn new(entry_type: EntryType) -> Entry {
        Entry { entry_type }
    }

    pub fn file() -> Entry {
        Entry::new(EntryType::File)
    }

    pub fn directory() -> Entry {
        Entry::new(EntryType::Directory)
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}
