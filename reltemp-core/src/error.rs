use thiserror::Error;

/// Errors raised by the pure derivation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An accessor was asked for the latest value of a zero-length sequence.
    #[error("weather series is empty")]
    EmptySeries,

    /// A mean was requested over a window with no samples in it,
    /// e.g. `hours_ago == 0` or not enough history before "now".
    #[error("averaging window contains no samples")]
    EmptyWindow,
}
