use thiserror::Error;

/// Mutating and membership operations of a virtual filesystem.
///
/// All paths are absolute and `/`-separated. A trailing delimiter is ignored.
pub trait FsBackend {
    /// Resets the tree so that it contains only the root directory.
    fn init(&mut self);
    /// Returns true if `path` is an existing directory.
    fn is_dir<P: AsRef<str>>(&self, path: P) -> bool;
    /// Returns true if `path` is an existing regular file.
    fn is_file<P: AsRef<str>>(&self, path: P) -> bool;
    /// Creates `path` and all its missing parents as directories.
    fn mkdir<P: AsRef<str>>(&mut self, path: P) -> Result<()>;
    /// Creates a file at `path`, creating missing parent directories.
    fn mkfile<P: AsRef<str>>(&mut self, path: P) -> Result<()>;
    /// Removes the file at `path`.
    fn rm_file<P: AsRef<str>>(&mut self, path: P) -> Result<()>;
    /// Removes the empty directory at `path`.
    fn rm_dir<P: AsRef<str>>(&mut self, path: P) -> Result<()>;
    /// Moves a file or a whole directory subtree from `src` to `dst`.
    fn mv<S: AsRef<str>, D: AsRef<str>>(&mut self, src: S, dst: D) -> Result<()>;
    /// Copies a file or a whole directory subtree from `src` to `dst`.
    fn cp<S: AsRef<str>, D: AsRef<str>>(&mut self, src: S, dst: D) -> Result<()>;
}

pub type Result<T> = std::result::Result<T, VfsError>;

/// Error kinds reported by the virtual filesystem.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Conflict,
    NotFound,
    NotEmpty,
    Forbidden,
    InvalidPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// The operation would collide with an existing entry.
    #[error("{path}: {reason}")]
    Conflict { path: String, reason: &'static str },
    /// The path does not exist, or does not exist as the expected kind.
    #[error("{path} does not exist")]
    NotFound { path: String },
    /// A directory still has children.
    #[error("directory {path} is not empty")]
    NotEmpty { path: String },
    /// The entry is protected (the root directory).
    #[error("operation not permitted on {path}")]
    Forbidden { path: String },
    /// The input is not an absolute path.
    #[error("invalid path: {path:?}")]
    InvalidPath { path: String },
}

impl VfsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VfsError::Conflict { .. } => ErrorKind::Conflict,
            VfsError::NotFound { .. } => ErrorKind::NotFound,
            VfsError::NotEmpty { .. } => ErrorKind::NotEmpty,
            VfsError::Forbidden { .. } => ErrorKind::Forbidden,
            VfsError::InvalidPath { .. } => ErrorKind::InvalidPath,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            VfsError::Conflict { path, .. }
            | VfsError::NotFound { path }
            | VfsError::NotEmpty { path }
            | VfsError::Forbidden { path }
            | VfsError::InvalidPath { path } => path,
        }
    }

    pub(crate) fn conflict(path: &str, reason: &'static str) -> Self {
        VfsError::Conflict {
            path: path.to_string(),
            reason,
        }
    }

    pub(crate) fn not_found(path: &str) -> Self {
        VfsError::NotFound {
            path: path.to_string(),
        }
    }
}

pub(crate) mod utils {
    use super::{Result, VfsError};
    use crate::path::DELIMITER;

    pub const ROOT: &str = "/";

    /// Normalizes an absolute path: collapses repeated delimiters and strips the trailing one.
    /// Returns `None` for empty or relative input.
    pub fn normalize<P: AsRef<str>>(path: P) -> Option<String> {
        let path = path.as_ref();
        if !path.starts_with(DELIMITER) {
            return None;
        }
        let mut result = String::with_capacity(path.len());
        for segment in path.split(DELIMITER).filter(|s| !s.is_empty()) {
            result.push(DELIMITER);
            result.push_str(segment);
        }
        if result.is_empty() {
            result.push(DELIMITER);
        }
        Some(result)
    }

    /// Like [`normalize`], but reports relative or empty input as an error.
    pub fn to_inner<P: AsRef<str>>(path: P) -> Result<String> {
        let path = path.as_ref();
        normalize(path).ok_or_else(|| VfsError::InvalidPath {
            path: path.to_string(),
        })
    }

    pub fn is_virtual_root(path: &str) -> bool {
        path == ROOT
    }

    /// Proper ancestors of a normalized path, top-down, without the root.
    /// `/a/b/c` gives `["/a", "/a/b"]`.
    pub fn ancestors(path: &str) -> Vec<&str> {
        path.match_indices(DELIMITER)
            .map(|(idx, _)| idx)
            .filter(|&idx| idx > 0)
            .map(|idx| &path[..idx])
            .collect()
    }

    /// Prefix of every key strictly below the directory `dir`.
    pub fn child_prefix(dir: &str) -> String {
        if is_virtual_root(dir) {
            ROOT.to_string()
        } else {
            format!("{}{}", dir, DELIMITER)
        }
    }

    /// Returns true if `path` equals `base` or lies below it.
    pub fn is_within(path: &str, base: &str) -> bool {
        path == base || path.starts_with(&child_prefix(base))
    }

}
