//! Request parsing for the cupcake endpoints.
//!
//! All four data fields are required on the payload, so a missing key is
//! rejected during deserialization rather than surfacing later as a
//! partial record.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::store::NewCupcake;

use super::errors::{ApiError, ApiResult};

/// Create/update request body: the four data fields of a cupcake.
#[derive(Debug, Clone, Deserialize)]
pub struct CupcakePayload {
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

impl From<CupcakePayload> for NewCupcake {
    fn from(payload: CupcakePayload) -> Self {
        NewCupcake {
            flavor: payload.flavor,
            size: payload.size,
            rating: payload.rating,
            image: payload.image,
        }
    }
}

/// Unwrap an extracted JSON body, mapping any rejection to a 400.
pub fn require_payload(
    body: Result<Json<CupcakePayload>, JsonRejection>,
) -> ApiResult<CupcakePayload> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

/// Parse a path segment into a record id, mapping failure to a 400.
pub fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid cupcake id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_requires_every_field() {
        let missing_image = r#"{"flavor":"Mocha","size":"Small","rating":4}"#;
        assert!(serde_json::from_str::<CupcakePayload>(missing_image).is_err());
    }

    #[test]
    fn test_payload_ignores_extra_fields() {
        let extra = r#"{"flavor":"Mocha","size":"Small","rating":4,"image":"x","id":7}"#;
        assert!(serde_json::from_str::<CupcakePayload>(extra).is_ok());
    }

    #[test]
    fn test_integral_rating_deserializes() {
        let body = r#"{"flavor":"Mocha","size":"Small","rating":5,"image":"http://x/m.png"}"#;
        let payload: CupcakePayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.rating, 5.0);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert!(parse_id("7").is_ok());
        let err = parse_id("seven").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
