//! An in-memory model of a hierarchical filesystem.
//!
//! ### Overview
//!
//! `vfs-tree` keeps a tree of directories and files addressed by absolute, `/`-separated paths
//! without touching any storage device. It is meant for tools that need to plan, simulate or
//! verify a reorganisation of a real directory tree before (or instead of) performing it.
//!
//! **Key ideas**:
//! - **Auto-materialization**: creating `/a/b/c.txt` creates `/a` and `/a/b` as well.
//! - **All or nothing**: an operation either fully applies or returns an error and leaves the tree
//!   unchanged.
//! - **Structural equality**: two trees are equal when they hold the same directory paths and the
//!   same file paths, no matter how they were built.
//! - **Path metadata**: [`path`] decomposes a single path into name, directory, extension, base
//!   name and depth.
//!
//! ```
//! use vfs_tree::{FsBackend, MapFS};
//!
//! let mut fs = MapFS::new();
//! fs.mkfile("/music/my_song.flac").unwrap();
//! fs.mv("/music/my_song.flac", "/archive/my_song.flac").unwrap();
//!
//! assert!(fs.is_dir("/music"));
//! assert!(fs.is_file("/archive/my_song.flac"));
//! ```

mod config;
mod core;
pub mod path;
mod vfs;

pub use crate::config::{ExistingFilePolicy, VfsConfig};
pub use crate::core::{ErrorKind, FsBackend, Result, VfsError};
pub use crate::vfs::{Entry, EntryType, FileInfo, MapFS};
