use std::time::SystemTimeError;
use thiserror::Error;

/// Failures while assembling the health payload.
#[derive(Error, Debug)]
pub enum HealthError {
    /// System clock reports a time before the Unix epoch.
    #[error("System clock is before the Unix epoch: {0}")]
    ClockBeforeEpoch(#[from] SystemTimeError),

    /// System clock reports a time chrono cannot represent.
    #[error("System clock value {0}s is out of range")]
    TimestampOutOfRange(u64),
}
