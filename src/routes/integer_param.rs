use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use num_bigint::BigInt;

use crate::error::GreetingError;

/// The single path parameter of a route, parsed as an unbounded integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerParam(pub BigInt);

impl<S> FromRequestParts<S> for IntegerParam
where
    S: Send + Sync,
{
    type Rejection = GreetingError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(GreetingError::PathExtraction)?;
        let (name, value) = params
            .into_iter()
            .next()
            .ok_or(GreetingError::MissingPathParameter)?;

        match value.parse::<BigInt>() {
            Ok(x) => Ok(Self(x)),
            Err(source) => Err(GreetingError::InvalidPathParameter {
                name,
                value,
                source,
            }),
        }
    }
}
