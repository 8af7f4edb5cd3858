use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, info_span};

use crate::config::Settings;
use crate::responder::{InvocationResponse, Responder};

/// Installs logging and serves invocations until the runtime shuts down.
pub async fn run(settings: Settings) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        // CloudWatch adds the ingestion time
        .without_time()
        .with_target(false)
        .try_init()?;

    info!(
        "Starting handler with message {:?} (log_invocation={})",
        settings.handler.message(),
        settings.handler.log_invocation(),
    );

    let responder = Responder::new(settings.handler);
    let responder = &responder;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle(responder, event)
    }))
    .await
}

pub async fn handle(
    responder: &Responder,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    span.in_scope(|| {
        responder.respond(&payload, &context).map_err(|e| {
            error!("{:?}", e); // log error chain to CloudWatch
            Error::from(e)
        })
    })
}
