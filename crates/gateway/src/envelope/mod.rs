//! AMF0 remoting envelope framing.

mod request;
mod response;

pub use request::{
    decode_envelope, decode_first_message_body, extract_first_message_body_raw, parse_request,
    split_request, Envelope, Header, Message, RoutingFields,
};
pub use response::{
    build_response, ResponseBody, ResponseBuilder, NULL_RESPONSE_URI, RESPONSE_VERSION,
};
