//! Errors raised while preparing the surface or handing it to the engine.

use crate::id::SurfaceId;
use thiserror::Error;

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("invalid bridge config: {0}")]
    InvalidConfig(String),

    /// Nothing in the document carries the identifier.
    #[error("no element {0} in the host document")]
    SurfaceNotFound(SurfaceId),

    /// The element exists but cannot be drawn on.
    #[error("element {0} is not a canvas")]
    NotASurface(SurfaceId),

    #[error("surface {0} has no 2d rendering context")]
    ContextUnavailable(SurfaceId),

    /// The host rejected a style, attribute, or context request.
    #[error("host error: {0}")]
    Host(String),

    #[error("engine has no callable entry point `{0}`")]
    EntryPointMissing(String),

    #[error("engine entry point failed: {0}")]
    Engine(String),
}

impl BridgeError {
    /// Wrap a host-side failure message.
    pub fn host(msg: impl Into<String>) -> Self {
        BridgeError::Host(msg.into())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::InvalidConfig(err.to_string())
    }
}
