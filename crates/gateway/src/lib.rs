//! AMF0 remoting gateway transport.
//!
//! Parses the routing fields out of a request envelope, hands the raw first
//! message body to business code, and wraps replies in a response envelope
//! that legacy clients accept.
//!
//! ```
//! use amf_gate::{build_response, parse_request, extract_first_message_body_raw};
//! use amf_gate_pack::Value;
//!
//! let request = [
//!     0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x07, b'a', b'p', b'i', b'.', b'f', b'o', b'o',
//!     0x00, 0x02, b'/', b'1', 0x00, 0x00, 0x00, 0x01, 0x05,
//! ];
//! let routing = parse_request(&request).unwrap();
//! assert_eq!(routing.target_uri, "api.foo");
//! assert_eq!(extract_first_message_body_raw(&request).unwrap(), &[0x05]);
//!
//! let reply = build_response(&routing.response_uri, Value::from(true), "token");
//! assert_eq!(&reply[..2], &[0x00, 0x00]);
//! ```

mod config;
mod dispatch;
mod error;

pub mod envelope;

pub use config::{
    GatewayConfig, DEFAULT_FALLBACK_MESSAGE, DEFAULT_HEADER_DECLARED_LENGTH,
    DEFAULT_RESULT_SUFFIX, DEFAULT_ROUTING_HEADER, DEFAULT_SESSION_PARAM,
};
pub use dispatch::{Dispatcher, Handler, Request};
pub use envelope::{
    build_response, decode_envelope, decode_first_message_body, extract_first_message_body_raw,
    parse_request, split_request, Envelope, Header, Message, ResponseBody, ResponseBuilder,
    RoutingFields,
};
pub use error::{DispatchError, GatewayError, HandlerError};
