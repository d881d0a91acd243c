//! Lifecycle phase of an asynchronous list load.

/// Discrete lifecycle state published by [`ListLoader`](super::ListLoader).
///
/// The payload lives inside the variant, so items and an error message can
/// never both be "current" at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase<T> {
    /// No load has been issued yet.
    #[default]
    Idle,
    /// A request is in flight; previously displayed data has been cleared.
    Loading,
    /// The most recent request completed with these items (possibly none).
    Success(Vec<T>),
    /// The most recent request failed with this message.
    Error(String),
}

impl<T> LoadPhase<T> {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// The loaded items, if the last request succeeded.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            LoadPhase::Success(items) => Some(items),
            _ => None,
        }
    }

    /// The failure message, if the last request failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}
