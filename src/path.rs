//! Decomposition of a single absolute path into its components.
//!
//! These are pure string functions. The input is expected to be an absolute, `/`-separated path
//! without a trailing delimiter (except for the root itself); anything else yields unspecified but
//! panic-free results.
//!
//! ```
//! use vfs_tree::path;
//!
//! let p = "/home/goggle/test/my_song.flac";
//! assert_eq!(path::name(p), "my_song.flac");
//! assert_eq!(path::directory(p), "/home/goggle/test");
//! assert_eq!(path::extension(p), ".flac");
//! assert_eq!(path::base_name(p), "my_song");
//! assert_eq!(path::depth(p), 4);
//! ```

pub const DELIMITER: char = '/';

/// Last segment of `path`. Empty for the root.
pub fn name(path: &str) -> &str {
    match path.rfind(DELIMITER) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// `path` without its last segment. The root for top-level entries and for the root itself.
pub fn directory(path: &str) -> &str {
    match path.rfind(DELIMITER) {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

/// Suffix of [`name`] starting at its last `.`, dot included. Empty if the name has no dot.
pub fn extension(path: &str) -> &str {
    let name = name(path);
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// [`name`] without its [`extension`].
pub fn base_name(path: &str) -> &str {
    let name = name(path);
    &name[..name.len() - extension(path).len()]
}

/// Number of segments below the root. The root has depth 0.
pub fn depth(path: &str) -> usize {
    path.split(DELIMITER).filter(|s| !s.is_empty()).count()
}
