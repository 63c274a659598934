//! This module provides a virtual filesystem tree that keeps every entry in an in-memory map.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::core::{FsBackend, Result, VfsError, utils};
use crate::path;
use crate::{Entry, EntryType, ExistingFilePolicy, FileInfo, VfsConfig};

/// A virtual filesystem tree that stores directory and file entries in memory, keyed by their
/// absolute path.
///
/// `MapFS` never touches the host filesystem. It is used to compute what a tree would look like
/// after a sequence of operations, or to assert expected end states in tests.
///
/// ### Internal state
///
/// * `entries` — the node arena.
///   - Key: normalized absolute path (always starts with `/`, no trailing `/` except the root).
///   - Value: `Entry` holding the node kind.
///   - `BTreeMap` keeps every subtree in one contiguous key range, so descendants of `/a` are the
///     keys starting with `/a/` and are found with a single range scan.
///
/// * `config` — behaviour switches, see [`VfsConfig`].
///
/// ### Invariants
///
/// 1. **Root existence**: `/` is always present and is a directory.
/// 2. **Parent consistency**: for any entry at `/a/b/c` there is a directory entry at `/a/b`.
/// 3. **Uniqueness**: each path maps to exactly one entry, so a path is never both a file and a
///    directory.
/// 4. **Atomicity**: an operation that returns `Err` leaves `entries` unchanged.
///
/// ### Thread Safety
///
/// Not synchronized. Wrap it in a `Mutex` at the application level if several threads share it.
///
/// ### Example
///
/// ```
/// use vfs_tree::{FsBackend, MapFS};
///
/// let mut fs = MapFS::new();
/// fs.mkdir("/home/goggle/Downloads/test").unwrap();
/// fs.mkfile("/home/goggle/Downloads/movie.mp4").unwrap();
/// fs.cp("/home/goggle/Downloads/movie.mp4", "/home/goggle/Downloads/test/Bang.mp4").unwrap();
///
/// assert_eq!(fs.real_files().len(), 2);
/// assert_eq!(fs.dirs().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MapFS {
    config: VfsConfig,
    entries: BTreeMap<String, Entry>,
}

impl MapFS {
    /// Creates a tree holding only the root directory, with the default configuration.
    pub fn new() -> Self {
        Self::with_config(VfsConfig::default())
    }

    pub fn with_config(config: VfsConfig) -> Self {
        let mut fs = Self {
            config,
            entries: BTreeMap::new(),
        };
        fs.init();
        fs
    }

    pub fn config(&self) -> VfsConfig {
        self.config
    }

    pub fn set_config(&mut self, config: VfsConfig) {
        self.config = config;
    }

    /// Returns true if any entry (file or directory) exists at `path`.
    pub fn exists<P: AsRef<str>>(&self, path: P) -> bool {
        self.lookup(path).is_some()
    }

    /// Number of entries, the root excluded.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns true if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every directory path, the root included.
    pub fn dirs(&self) -> BTreeSet<&str> {
        self.paths_of(EntryType::Directory)
    }

    /// Every regular file path.
    pub fn real_files(&self) -> BTreeSet<&str> {
        self.paths_of(EntryType::File)
    }

    /// Decomposition of the entry at `path`, or `None` if nothing is there.
    pub fn file_info<P: AsRef<str>>(&self, path: P) -> Option<FileInfo> {
        let inner = utils::normalize(path)?;
        let entry = self.entries.get(&inner)?;
        Some(FileInfo::new(inner, entry.entry_type()))
    }

    /// Lists the immediate children of the directory `path`.
    ///
    /// Returns `NotFound` if `path` is not a directory.
    pub fn ls<P: AsRef<str>>(&self, path: P) -> Result<Vec<&str>> {
        let dir = self.existing_dir(path)?;
        Ok(self
            .descendants(&dir)
            .map(|(p, _)| p)
            .filter(|&p| path::directory(p) == dir)
            .collect())
    }

    /// Returns the files found anywhere below the directory `path`.
    ///
    /// Files sitting directly inside `path` are part of the result only when
    /// `include_base_files` is true; files in nested subdirectories are always included.
    /// Returns `NotFound` if `path` is not a directory.
    pub fn get_files<P: AsRef<str>>(
        &self,
        path: P,
        include_base_files: bool,
    ) -> Result<Vec<FileInfo>> {
        let dir = self.existing_dir(path)?;
        Ok(self
            .descendants(&dir)
            .filter(|(_, entry)| entry.is_file())
            .filter(|(p, _)| include_base_files || path::directory(p) != dir)
            .map(|(p, entry)| FileInfo::new(p, entry.entry_type()))
            .collect())
    }

    /// Structural equality: both trees hold the same directory paths and the same file paths.
    pub fn equal(&self, other: &MapFS) -> bool {
        self.dirs() == other.dirs() && self.real_files() == other.real_files()
    }

    fn lookup<P: AsRef<str>>(&self, path: P) -> Option<&Entry> {
        utils::normalize(path).and_then(|inner| self.entries.get(&inner))
    }

    fn paths_of(&self, entry_type: EntryType) -> BTreeSet<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.entry_type() == entry_type)
            .map(|(p, _)| p.as_str())
            .collect()
    }

    fn existing_dir<P: AsRef<str>>(&self, path: P) -> Result<String> {
        let inner = utils::to_inner(path)?;
        match self.entries.get(&inner) {
            Some(entry) if entry.is_dir() => Ok(inner),
            _ => Err(VfsError::not_found(&inner)),
        }
    }

    /// All entries strictly below the directory `dir`, in key order.
    fn descendants(&self, dir: &str) -> impl Iterator<Item = (&str, &Entry)> {
        let prefix = utils::child_prefix(dir);
        self.entries
            .range(prefix.clone()..)
            .take_while(move |(p, _)| p.starts_with(&prefix))
            .filter(|(p, _)| !utils::is_virtual_root(p))
            .map(|(p, entry)| (p.as_str(), entry))
    }

    fn has_children(&self, dir: &str) -> bool {
        self.descendants(dir).next().is_some()
    }

    /// Fails if a file occupies one of the ancestors of `path`.
    fn check_ancestors(&self, path: &str) -> Result<()> {
        for ancestor in utils::ancestors(path) {
            if self.entries.get(ancestor).is_some_and(Entry::is_file) {
                return Err(VfsError::conflict(ancestor, "a file occupies a parent path"));
            }
        }
        Ok(())
    }

    /// Creates the missing ancestors of `path` top-down. `check_ancestors` must have passed.
    fn materialize_ancestors(&mut self, path: &str) {
        for ancestor in utils::ancestors(path) {
            if !self.entries.contains_key(ancestor) {
                debug!("Creating parent directory {}", ancestor);
                self.entries.insert(ancestor.to_string(), Entry::directory());
            }
        }
    }

    /// Shared body of `mv` and `cp`.
    fn transfer(&mut self, src: &str, dst: &str, keep_source: bool) -> Result<()> {
        let src = utils::to_inner(src)?;
        let dst = utils::to_inner(dst)?;

        let Some(entry) = self.entries.get(&src).copied() else {
            return Err(VfsError::not_found(&src));
        };
        if !keep_source && utils::is_virtual_root(&src) {
            return Err(VfsError::Forbidden { path: src });
        }
        if self.entries.contains_key(&dst) {
            return Err(VfsError::conflict(&dst, "destination already exists"));
        }
        if utils::is_within(&dst, &src) {
            return Err(VfsError::conflict(&dst, "destination lies inside the source"));
        }
        self.check_ancestors(&dst)?;

        let mut subtree = vec![(src.clone(), entry)];
        if entry.is_dir() {
            subtree.extend(self.descendants(&src).map(|(p, e)| (p.to_string(), *e)));
        }

        if !keep_source {
            for (p, _) in &subtree {
                self.entries.remove(p);
            }
        }
        self.materialize_ancestors(&dst);
        for (p, e) in subtree {
            let rewritten = format!("{}{}", dst, &p[src.len()..]);
            self.entries.insert(rewritten, e);
        }

        Ok(())
    }
}

impl Default for MapFS {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MapFS {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for MapFS {}

impl FsBackend for MapFS {
    /// Drops every entry and re-creates the root. The configuration is kept.
    fn init(&mut self) {
        self.entries.clear();
        self.entries.insert(utils::ROOT.to_string(), Entry::directory());
    }

    /// Returns true if `path` is a directory. A trailing `/` is ignored.
    fn is_dir<P: AsRef<str>>(&self, path: P) -> bool {
        self.lookup(path).is_some_and(Entry::is_dir)
    }

    /// Returns true if `path` is a regular file.
    fn is_file<P: AsRef<str>>(&self, path: P) -> bool {
        self.lookup(path).is_some_and(Entry::is_file)
    }

    /// Creates the directory and all its parents (if needed).
    /// Succeeds without changes if the directory already exists.
    fn mkdir<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let inner = utils::to_inner(path)?;

        match self.entries.get(&inner) {
            Some(entry) if entry.is_dir() => {
                trace!("Directory {} already exists", inner);
                return Ok(());
            }
            Some(_) => return Err(VfsError::conflict(&inner, "a file already exists")),
            None => {}
        }
        self.check_ancestors(&inner)?;

        self.materialize_ancestors(&inner);
        debug!("Creating directory {}", inner);
        self.entries.insert(inner, Entry::directory());
        Ok(())
    }

    /// Creates a file, creating its parent directories if needed.
    /// Repeated creation is governed by [`ExistingFilePolicy`].
    fn mkfile<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let inner = utils::to_inner(path)?;

        match self.entries.get(&inner) {
            Some(entry) if entry.is_dir() => {
                return Err(VfsError::conflict(&inner, "a directory already exists"));
            }
            Some(_) => {
                return match self.config.existing_file {
                    ExistingFilePolicy::Tolerate => {
                        trace!("File {} already exists", inner);
                        Ok(())
                    }
                    ExistingFilePolicy::Reject => {
                        Err(VfsError::conflict(&inner, "a file already exists"))
                    }
                };
            }
            None => {}
        }
        self.check_ancestors(&inner)?;

        self.materialize_ancestors(&inner);
        debug!("Creating file {}", inner);
        self.entries.insert(inner, Entry::file());
        Ok(())
    }

    /// Removes a regular file. Parent directories stay in place even if they become empty.
    fn rm_file<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let inner = utils::to_inner(path)?;
        if !self.entries.get(&inner).is_some_and(Entry::is_file) {
            return Err(VfsError::not_found(&inner));
        }
        debug!("Removing file {}", inner);
        self.entries.remove(&inner);
        Ok(())
    }

    /// Removes an empty directory. Subtrees must be removed bottom-up by the caller.
    fn rm_dir<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let inner = utils::to_inner(path)?;
        if utils::is_virtual_root(&inner) {
            return Err(VfsError::Forbidden { path: inner });
        }
        if !self.entries.get(&inner).is_some_and(Entry::is_dir) {
            return Err(VfsError::not_found(&inner));
        }
        if self.has_children(&inner) {
            return Err(VfsError::NotEmpty { path: inner });
        }
        debug!("Removing directory {}", inner);
        self.entries.remove(&inner);
        Ok(())
    }

    /// Moves `src` to `dst`. For directories every descendant is rewritten to keep its position
    /// relative to the moved directory. Missing parents of `dst` are created.
    fn mv<S: AsRef<str>, D: AsRef<str>>(&mut self, src: S, dst: D) -> Result<()> {
        let (src, dst) = (src.as_ref(), dst.as_ref());
        self.transfer(src, dst, false)?;
        debug!("Moved {} to {}", src, dst);
        Ok(())
    }

    /// Copies `src` to `dst`, leaving `src` untouched. Directories are copied with their whole
    /// subtree. Missing parents of `dst` are created.
    fn cp<S: AsRef<str>, D: AsRef<str>>(&mut self, src: S, dst: D) -> Result<()> {
        let (src, dst) = (src.as_ref(), dst.as_ref());
        self.transfer(src, dst, true)?;
        debug!("Copied {} to {}", src, dst);
        Ok(())
    }
}
