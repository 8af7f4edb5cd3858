use hello_handlers::{HandlerConfig, Settings};
use lambda_runtime::Error;

// Same responder as hello-world, but it also logs every event and context.
#[tokio::main]
async fn main() -> Result<(), Error> {
    hello_handlers::run(Settings::from_env(HandlerConfig::hello_again())?).await
}
