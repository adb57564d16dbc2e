/// Errors that can occur in widget bridge operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Wire-level error building an outbound envelope.
    #[error("wire error: {0}")]
    Wire(#[from] framebridge_wire::WireError),

    /// No parent context is available to receive outbound messages.
    ///
    /// Running without a host frame is an environment error, not a
    /// recoverable condition; there is no retry and no fallback transport.
    #[error("host frame unavailable: {0}")]
    HostUnavailable(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
