use serde::Serialize;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{http::json_response, models::timestamp};

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub method: String,
    pub timestamp: String,
}

/// Any method on /api/test.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let payload = HealthResponse {
        status: "working",
        message: "API is working correctly!",
        method: req.method().to_string(),
        timestamp: timestamp::now(),
    };
    json_response(StatusCode::OK, &payload)
}
