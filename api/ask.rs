use bridgehub_api::{handlers, telemetry, Settings};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let settings = Settings::from_env();
    handlers::ask::handler(req, &settings).await
}
