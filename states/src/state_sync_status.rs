#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered but never computed.
    #[default]
    Init,
    /// Compute ran and its result is waiting in the runtime channel.
    Pending,
    /// State changed since the last `run_computed`.
    Dirty,
    Clean,
}
