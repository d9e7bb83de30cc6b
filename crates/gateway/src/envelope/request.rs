//! Request envelope parsing.
//!
//! ```text
//! version:u16 | headerCount:u16 | header* | messageCount:u16 | message*
//! header  := name:str16, mustUnderstand:u8, declaredLen:u32, value:AMF0
//! message := target:str16, response:str16, declaredLen:u32, body:AMF0
//! ```
//!
//! Declared lengths are read and never trusted: headers are stepped over by
//! skipping their value, and the first message body is whatever follows its
//! length field. Some senders write a nonsense body length.

use amf_gate_pack::amf0::Amf0Decoder;
use amf_gate_pack::{decode_amf0, Value};
use serde::Serialize;

use crate::GatewayError;

/// The fields a dispatcher routes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingFields {
    pub version: u16,
    pub target_uri: String,
    pub response_uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub must_understand: bool,
    pub declared_length: u32,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub target_uri: String,
    pub response_uri: String,
    pub declared_length: u32,
    pub body: Value,
}

/// A fully decoded request envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub version: u16,
    pub headers: Vec<Header>,
    pub messages: Vec<Message>,
}

impl Envelope {
    pub fn first_message(&self) -> Option<&Message> {
        self.messages.first()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let headers: Vec<_> = self
            .headers
            .iter()
            .map(|h| {
                serde_json::json!({
                    "name": h.name,
                    "must_understand": h.must_understand,
                    "declared_length": h.declared_length,
                    "value": h.value.to_json(),
                })
            })
            .collect();
        let messages: Vec<_> = self
            .messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "target_uri": m.target_uri,
                    "response_uri": m.response_uri,
                    "declared_length": m.declared_length,
                    "body": m.body.to_json(),
                })
            })
            .collect();
        serde_json::json!({
            "version": self.version,
            "headers": headers,
            "messages": messages,
        })
    }
}

/// Walks version, headers, message count and the first message's fields,
/// leaving the decoder positioned at the first body.
fn read_head(bytes: &[u8]) -> Result<(RoutingFields, Amf0Decoder<'_>), GatewayError> {
    let mut decoder = Amf0Decoder::new(bytes);
    let version = decoder.reader.u16()?;
    let header_count = decoder.reader.u16()?;
    for _ in 0..header_count {
        let name_len = decoder.reader.u16()?;
        decoder.reader.skip(name_len as usize)?;
        decoder.reader.u8()?;
        decoder.reader.u32()?;
        decoder.skip_any()?;
    }
    if decoder.reader.u16()? == 0 {
        return Err(GatewayError::EmptyMessageList);
    }
    let target_uri = decoder.reader.utf8_prefixed()?;
    let response_uri = decoder.reader.utf8_prefixed()?;
    decoder.reader.u32()?;
    let routing = RoutingFields {
        version,
        target_uri,
        response_uri,
    };
    Ok((routing, decoder))
}

/// Extracts the routing fields, skipping over the first message body.
///
/// Messages after the first are ignored.
pub fn parse_request(bytes: &[u8]) -> Result<RoutingFields, GatewayError> {
    let (routing, mut decoder) = read_head(bytes)?;
    decoder.skip_any()?;
    tracing::debug!(
        version = routing.version,
        target_uri = %routing.target_uri,
        response_uri = %routing.response_uri,
        len = bytes.len(),
        "parsed request envelope"
    );
    Ok(routing)
}

/// Returns every byte after the first message's declared body length.
///
/// The declared length is ignored entirely, so an envelope carrying more
/// than one message yields the later messages as part of the body.
pub fn extract_first_message_body_raw(bytes: &[u8]) -> Result<&[u8], GatewayError> {
    split_request(bytes).map(|(_, body)| body)
}

/// Routing fields and raw first body in a single pass.
pub fn split_request(bytes: &[u8]) -> Result<(RoutingFields, &[u8]), GatewayError> {
    let (routing, mut decoder) = read_head(bytes)?;
    let body = decoder.reader.rest();
    Ok((routing, body))
}

/// Decodes the single AMF0 value at the start of the first message body.
pub fn decode_first_message_body(bytes: &[u8]) -> Result<Value, GatewayError> {
    let body = extract_first_message_body_raw(bytes)?;
    Ok(decode_amf0(body)?)
}

/// Decodes every header and message, stepping over values by decoding them.
pub fn decode_envelope(bytes: &[u8]) -> Result<Envelope, GatewayError> {
    let mut decoder = Amf0Decoder::new(bytes);
    let version = decoder.reader.u16()?;
    let header_count = decoder.reader.u16()?;
    let mut headers = Vec::new();
    for _ in 0..header_count {
        let name = decoder.reader.utf8_prefixed()?;
        let must_understand = decoder.reader.u8()? != 0;
        let declared_length = decoder.reader.u32()?;
        let value = decoder.read_any()?;
        headers.push(Header {
            name,
            must_understand,
            declared_length,
            value,
        });
    }
    let message_count = decoder.reader.u16()?;
    if message_count == 0 {
        return Err(GatewayError::EmptyMessageList);
    }
    let mut messages = Vec::new();
    for _ in 0..message_count {
        let target_uri = decoder.reader.utf8_prefixed()?;
        let response_uri = decoder.reader.utf8_prefixed()?;
        let declared_length = decoder.reader.u32()?;
        let body = decoder.read_any()?;
        messages.push(Message {
            target_uri,
            response_uri,
            declared_length,
            body,
        });
    }
    Ok(Envelope {
        version,
        headers,
        messages,
    })
}
