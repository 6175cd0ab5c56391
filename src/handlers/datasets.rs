use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    error::AppError,
    http::failure,
    models::DatasetsResponse,
    services::catalog,
};

/// GET /api/datasets
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if req.method().as_str() != "GET" {
        return failure(AppError::MethodNotAllowed {
            method: req.method().to_string(),
            allow: "GET",
        });
    }

    let payload = DatasetsResponse { datasets: catalog::all() };
    match serde_json::to_string(&payload) {
        Ok(body) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(body.into())?),
        Err(e) => failure(AppError::DatasetsUnavailable(e)),
    }
}
