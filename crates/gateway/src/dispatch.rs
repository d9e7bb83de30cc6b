//! Routes requests to handlers by target uri.
//!
//! [`Dispatcher::dispatch`] always yields a response envelope. Any failure,
//! whether a malformed request, an unknown target or a handler error, is
//! answered with a fallback body and logged.

use std::collections::HashMap;
use std::fmt;

use amf_gate_buffers::OctetPreview;
use amf_gate_pack::{decode_amf0, Value};

use crate::envelope::{
    split_request, ResponseBody, ResponseBuilder, RoutingFields, NULL_RESPONSE_URI,
};
use crate::{DispatchError, GatewayConfig, HandlerError};

/// Bytes of a malformed request included in the warning event.
const PREVIEW_OCTETS: usize = 32;

/// A decoded request as seen by a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub routing: RoutingFields,
    /// The first message body, decoded.
    pub params: Value,
}

pub trait Handler: Send + Sync {
    fn call(&self, request: &Request) -> Result<ResponseBody, HandlerError>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Result<ResponseBody, HandlerError> + Send + Sync,
{
    fn call(&self, request: &Request) -> Result<ResponseBody, HandlerError> {
        self(request)
    }
}

pub struct Dispatcher {
    builder: ResponseBuilder,
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets: Vec<_> = self.handlers.keys().collect();
        targets.sort();
        f.debug_struct("Dispatcher")
            .field("config", self.builder.config())
            .field("targets", &targets)
            .finish()
    }
}

impl Dispatcher {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            builder: ResponseBuilder::new(config),
            handlers: HashMap::new(),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        self.builder.config()
    }

    /// Registers `handler` for `target`, replacing any previous one.
    pub fn register(
        &mut self,
        target: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        self.handlers.insert(target.into(), Box::new(handler));
        self
    }

    pub fn has_handler(&self, target: &str) -> bool {
        self.handlers.contains_key(target)
    }

    /// Runs the handler for the request's target and returns the response
    /// envelope.
    pub fn dispatch(&self, bytes: &[u8], session_token: &str) -> Vec<u8> {
        match self.try_dispatch(bytes) {
            Ok((routing, body)) => {
                self.builder
                    .build(&routing.response_uri, body, session_token)
            }
            Err((response_uri, err)) => {
                tracing::warn!(
                    error = %err,
                    offset = ?err.position(),
                    len = bytes.len(),
                    preview = %OctetPreview::new(bytes, PREVIEW_OCTETS),
                    "answering with fallback response"
                );
                let body = Value::object([
                    ("error", Value::from(self.config().fallback_message.as_str())),
                    ("detail", Value::from(err.to_string())),
                ]);
                self.builder.build(&response_uri, body, session_token)
            }
        }
    }

    /// On failure, also returns the response uri to address the fallback to.
    fn try_dispatch(
        &self,
        bytes: &[u8],
    ) -> Result<(RoutingFields, ResponseBody), (String, DispatchError)> {
        let (routing, body) =
            split_request(bytes).map_err(|e| (NULL_RESPONSE_URI.to_owned(), e.into()))?;
        let fail = |err: DispatchError| (routing.response_uri.clone(), err);

        let handler = self
            .handlers
            .get(&routing.target_uri)
            .ok_or_else(|| fail(DispatchError::NoHandler(routing.target_uri.clone())))?;
        let params = decode_amf0(body).map_err(|e| fail(DispatchError::Gateway(e.into())))?;
        tracing::debug!(target_uri = %routing.target_uri, "dispatching request");

        let request = Request { routing, params };
        match handler.call(&request) {
            Ok(body) => Ok((request.routing, body)),
            Err(source) => Err((
                request.routing.response_uri.clone(),
                DispatchError::Handler {
                    target: request.routing.target_uri.clone(),
                    source,
                },
            )),
        }
    }
}
