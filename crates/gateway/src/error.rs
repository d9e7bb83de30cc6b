//! Gateway and dispatch error types.

use amf_gate_buffers::BufferError;
use amf_gate_pack::AmfError;
use thiserror::Error;

/// Error type for envelope parsing and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error(transparent)]
    Codec(#[from] AmfError),
    #[error("envelope carries no messages")]
    EmptyMessageList,
    #[error("invalid gateway config: {0}")]
    Config(String),
}

impl From<BufferError> for GatewayError {
    fn from(err: BufferError) -> Self {
        GatewayError::Codec(err.into())
    }
}

impl GatewayError {
    /// Byte offset of a codec failure.
    pub fn position(&self) -> Option<usize> {
        match self {
            GatewayError::Codec(err) => Some(err.position()),
            GatewayError::EmptyMessageList | GatewayError::Config(_) => None,
        }
    }
}

/// Failure reported by a business handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    pub message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a request was answered with the fallback response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("no handler registered for target `{0}`")]
    NoHandler(String),
    #[error("handler for `{target}` failed: {source}")]
    Handler {
        target: String,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    pub fn position(&self) -> Option<usize> {
        match self {
            DispatchError::Gateway(err) => err.position(),
            DispatchError::NoHandler(_) | DispatchError::Handler { .. } => None,
        }
    }
}
