//! Response types for the cupcake endpoints.
//!
//! The create response wraps one record under the plural `cupcakes`
//! key; that quirk is part of the wire contract and pinned by tests here
//! and in the integration suite.

use serde::Serialize;

use crate::store::Cupcake;

/// List response: every stored record
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub cupcakes: Vec<Cupcake>,
}

impl ListResponse {
    pub fn new(cupcakes: Vec<Cupcake>) -> Self {
        Self { cupcakes }
    }
}

/// Single record response (get, update)
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse {
    pub cupcake: Cupcake,
}

impl SingleResponse {
    pub fn new(cupcake: Cupcake) -> Self {
        Self { cupcake }
    }
}

/// Create response: one record under the plural key
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub cupcakes: Cupcake,
}

impl CreateResponse {
    pub fn new(cupcakes: Cupcake) -> Self {
        Self { cupcakes }
    }
}

/// Message-only response (delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> Cupcake {
        Cupcake {
            id,
            flavor: "Chocolate".to_string(),
            size: "Large".to_string(),
            rating: 5.0,
            image: "http://example.com/c.png".to_string(),
        }
    }

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![record(1), record(2)]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cupcakes"].as_array().unwrap().len(), 2);
        assert_eq!(json["cupcakes"][0]["id"], 1);
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(record(4));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cupcake"]["id"], 4);
        assert_eq!(json["cupcake"]["flavor"], "Chocolate");
    }

    #[test]
    fn test_create_response_uses_plural_key() {
        let response = CreateResponse::new(record(1));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cupcakes"]["id"], 1);
        assert!(json.get("cupcake").is_none());
    }

    #[test]
    fn test_delete_message() {
        let json = serde_json::to_value(MessageResponse::deleted()).unwrap();
        assert_eq!(json["message"], "Deleted");
    }
}
