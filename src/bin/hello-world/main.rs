use hello_handlers::{HandlerConfig, Settings};
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    hello_handlers::run(Settings::from_env(HandlerConfig::hello_world())?).await
}
