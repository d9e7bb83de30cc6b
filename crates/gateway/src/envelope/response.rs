//! Response envelope construction.
//!
//! ```text
//! version:u16=0 | headerCount:u16=1 | header | messageCount:u16=1 | message
//! header  := routing header name, mustUnderstand=0, declaredLen, "?<param>=<token>"
//! message := responseUri + suffix, "null", bodyLen:u32 (accurate), body
//! ```

use amf_gate_pack::amf0::Amf0Encoder;
use amf_gate_pack::Value;

use crate::GatewayConfig;

/// Version written into every response, whatever the request carried.
pub const RESPONSE_VERSION: u16 = 0;
/// Response uri written into every response message.
pub const NULL_RESPONSE_URI: &str = "null";

/// The body of a response message.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Encoded as AMF0.
    Value(Value),
    /// Pre-encoded AMF0, copied verbatim. Used to replay captured payloads.
    Raw(Vec<u8>),
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        ResponseBody::Value(value)
    }
}

impl From<serde_json::Value> for ResponseBody {
    fn from(json: serde_json::Value) -> Self {
        ResponseBody::Value(json.into())
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(raw: Vec<u8>) -> Self {
        ResponseBody::Raw(raw)
    }
}

/// Builds response envelopes for one [`GatewayConfig`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    config: GatewayConfig,
}

impl ResponseBuilder {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Trailing slashes trimmed, result suffix appended unless present.
    pub fn target_uri(&self, response_uri: &str) -> String {
        let trimmed = response_uri.trim_end_matches('/');
        let suffix = self.config.result_suffix.as_str();
        if trimmed.ends_with(suffix) {
            trimmed.to_owned()
        } else {
            format!("{}{}", trimmed, suffix)
        }
    }

    pub fn build(
        &self,
        response_uri: &str,
        body: impl Into<ResponseBody>,
        session_token: &str,
    ) -> Vec<u8> {
        let target_uri = self.target_uri(response_uri);
        let (body, raw) = match body.into() {
            ResponseBody::Raw(bytes) => (bytes, true),
            ResponseBody::Value(value) => (Amf0Encoder::new().encode(&value), false),
        };

        let mut encoder = Amf0Encoder::new();
        encoder.writer.u16(RESPONSE_VERSION);

        encoder.writer.u16(1);
        encoder.writer.utf8_prefixed(&self.config.routing_header);
        encoder.writer.u8(0);
        encoder.writer.u32(self.config.header_declared_length);
        encoder.write_str(&format!(
            "?{}={}",
            self.config.session_param, session_token
        ));

        encoder.writer.u16(1);
        encoder.writer.utf8_prefixed(&target_uri);
        encoder.writer.utf8_prefixed(NULL_RESPONSE_URI);
        encoder.writer.u32(body.len() as u32);
        encoder.writer.buf(&body);

        tracing::debug!(
            target_uri = %target_uri,
            body_len = body.len(),
            raw,
            "built response envelope"
        );
        encoder.writer.flush()
    }
}

/// Builds a response with the default configuration.
pub fn build_response(
    response_uri: &str,
    body: impl Into<ResponseBody>,
    session_token: &str,
) -> Vec<u8> {
    ResponseBuilder::default().build(response_uri, body, session_token)
}
