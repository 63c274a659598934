mod entry;
mod file_info;
mod map_fs;

pub use entry::{Entry, EntryType};
pub use file_info::FileInfo;
pub use map_fs::MapFS;
