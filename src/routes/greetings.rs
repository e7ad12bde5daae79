use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::domain::GreetingResponse;
use crate::routes::IntegerParam;

#[tracing::instrument(name = "Greet Andresinho")]
pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse::hello())
}

#[tracing::instrument(name = "Declare love for Andresinho")]
pub async fn love() -> Json<GreetingResponse> {
    Json(GreetingResponse::love())
}

#[tracing::instrument(name = "Greet with a hundred offset")]
pub async fn plus_hundred(IntegerParam(x): IntegerParam) -> Json<GreetingResponse> {
    Json(GreetingResponse::plus_hundred(x))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"detail": "Not Found"})),
    )
}
