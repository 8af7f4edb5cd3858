use lambda_runtime::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::HandlerConfig;

/// HTTP-style envelope handed back to the runtime.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Body<'a, E> {
    message: &'a str,
    input: &'a E,
}

/// Answers invocations with the configured message and an echo of the event.
///
/// A responder holds no per-invocation state, so one instance can serve any
/// number of concurrent invocations by shared reference.
#[derive(Clone, Debug)]
pub struct Responder {
    config: HandlerConfig,
}

impl Responder {
    pub const fn new(config: HandlerConfig) -> Self {
        Self { config }
    }

    pub fn message(&self) -> &str {
        self.config.message()
    }

    pub fn respond<E: Serialize>(
        &self,
        event: &E,
        context: &Context,
    ) -> Result<InvocationResponse, InvocationError> {
        if self.config.log_invocation() {
            log_invocation(event, context);
        }

        let body = serde_json::to_string(&Body {
            message: self.message(),
            input: event,
        })?;

        Ok(InvocationResponse {
            status_code: 200,
            body,
        })
    }
}

// Best-effort: a failure here only costs the log line. The body goes through
// the same serializer, so a failure that repeats surfaces as the body error.
fn log_invocation<E: Serialize>(event: &E, context: &Context) {
    match serde_json::to_string(event) {
        Ok(event) => info!("Event: {}", event),
        Err(e) => warn!("Event: <unrenderable: {}>", e),
    }
    info!("Context: {:?}", context);
}
