use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Rejections raised before a handler runs.
#[derive(thiserror::Error)]
pub enum GreetingError {
    #[error("`{value}` is not a valid integer for path parameter `{name}`")]
    InvalidPathParameter {
        name: String,
        value: String,
        #[source]
        source: num_bigint::ParseBigIntError,
    },
    #[error("Failed to extract the path parameters")]
    PathExtraction(#[from] PathRejection),
    #[error("The matched route has no path parameter")]
    MissingPathParameter,
}

impl std::fmt::Debug for GreetingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for GreetingError {
    fn into_response(self) -> Response {
        tracing::warn!("{:?}", self);
        match &self {
            GreetingError::InvalidPathParameter { name, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::single(
                    vec!["path".to_string(), name.clone()],
                    "Input should be a valid integer, unable to parse string as an integer"
                        .to_string(),
                    "int_parsing",
                )),
            )
                .into_response(),
            GreetingError::PathExtraction(rejection) => (
                rejection.status(),
                Json(ErrorResponse::single(
                    vec!["path".to_string()],
                    rejection.body_text(),
                    "path_extraction",
                )),
            )
                .into_response(),
            GreetingError::MissingPathParameter => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::single(
                    vec!["path".to_string()],
                    self.to_string(),
                    "missing_path_parameter",
                )),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: Vec<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ErrorResponse {
    fn single(loc: Vec<String>, msg: String, kind: &'static str) -> Self {
        Self {
            detail: vec![ErrorDetail { loc, msg, kind }],
        }
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
