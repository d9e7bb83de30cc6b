//! Gateway configuration.
//!
//! Every field has a default matching what legacy clients expect, so an
//! empty JSON object is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GatewayError;

pub const DEFAULT_ROUTING_HEADER: &str = "AppendToGatewayUrl";
pub const DEFAULT_SESSION_PARAM: &str = "PHPSESSID";
pub const DEFAULT_RESULT_SUFFIX: &str = "/onResult";
pub const DEFAULT_HEADER_DECLARED_LENGTH: u32 = 1;
pub const DEFAULT_FALLBACK_MESSAGE: &str = "internal error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Name of the single header written into every response.
    pub routing_header: String,
    /// Query parameter carrying the session token in that header.
    pub session_param: String,
    /// Appended once to the request's response uri.
    pub result_suffix: String,
    /// Declared length written for the routing header. Clients expect the
    /// sentinel, not the real size.
    pub header_declared_length: u32,
    /// Text placed in the body of fallback responses.
    pub fallback_message: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            routing_header: DEFAULT_ROUTING_HEADER.to_owned(),
            session_param: DEFAULT_SESSION_PARAM.to_owned(),
            result_suffix: DEFAULT_RESULT_SUFFIX.to_owned(),
            header_declared_length: DEFAULT_HEADER_DECLARED_LENGTH,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_owned(),
        }
    }
}

impl GatewayConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GatewayError> {
        serde_json::from_str(json).map_err(|e| GatewayError::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}
