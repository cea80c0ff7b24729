//! Error types for template construction

/// Errors building declarative resource records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// Snapshot-window start hour outside 0–23
    #[error("snapshot window starting hour must be between 0 and 23, got {0}")]
    StartHourOutOfRange(u32),

    /// Snapshot-window start minute outside 0–59
    #[error("snapshot window starting minute must be between 0 and 59, got {0}")]
    StartMinuteOutOfRange(u32),

    /// Snapshot-window duration outside 60 minutes to one week
    #[error("snapshot window duration must be between 60 and 10080 minutes, got {0}")]
    DurationOutOfRange(u32),

    /// A cluster must run at least one node
    #[error("a cache cluster needs at least one node")]
    NoNodes,

    /// Hash-slot range outside the keyspace
    #[error("slot range {start}-{end} is not within 0-16383")]
    SlotRangeOutOfBounds {
        /// First slot of the rejected range
        start: u32,
        /// Last slot of the rejected range
        end: u32,
    },

    /// A template logical id was used twice
    #[error("duplicate logical id `{0}` in template")]
    DuplicateLogicalId(String),
}
