use bridgehub_api::{handlers, telemetry};
use vercel_runtime::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    run(handlers::datasets::handler).await
}
