/// What `mkfile` does when a file already exists at the target path.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ExistingFilePolicy {
    /// Repeated creation succeeds and leaves the tree unchanged.
    #[default]
    Tolerate,
    /// Repeated creation fails with a conflict.
    Reject,
}

/// Behaviour switches of a [`MapFS`](crate::MapFS).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct VfsConfig {
    pub existing_file: ExistingFilePolicy,
}

impl VfsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_file(mut self, policy: ExistingFilePolicy) -> Self {
        self.existing_file = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerates_existing_files() {
        assert_eq!(VfsConfig::default().existing_file, ExistingFilePolicy::Tolerate);
    }

    #[test]
    fn test_with_existing_file() {
        let config = VfsConfig::new().with_existing_file(ExistingFilePolicy::Reject);
        assert_eq!(config.existing_file, ExistingFilePolicy::Reject);
    }
}
