/// Core traits for Aria Player
///
/// Platform capabilities are injected at the seams so the library and
/// scanner stay testable without an OS permission dialog.

/// Capability check for reading device storage
///
/// Granting is handled by the platform; the library only consumes the
/// resulting boolean.
pub trait StoragePermission: Send + Sync {
    /// Whether media storage can currently be read
    fn can_read_storage(&self) -> bool;
}

/// Fixed permission answer, for tests and platforms without a runtime
/// permission model
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(
    /// The fixed answer
    pub bool,
);

impl StoragePermission for StaticPermission {
    fn can_read_storage(&self) -> bool {
        self.0
    }
}
