use thiserror::Error;

/// Failure of a remote call as seen by the explorer.
///
/// `Transport` covers the cases where the service never answered usefully
/// (network failure, non-JSON body, unexpected status with no detail).
/// `Service` carries the reason the service itself gave for rejecting the
/// request, e.g. not enough history to fit a forecast model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{0}")]
    Service(String),
}

impl FetchError {
    /// The human-readable message, without the taxonomy prefix.
    pub fn message(&self) -> &str {
        match self {
            FetchError::Transport(msg) | FetchError::Service(msg) => msg,
        }
    }
}
