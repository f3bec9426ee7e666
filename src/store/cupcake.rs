//! Cupcake record types.

use serde::{Deserialize, Serialize};

/// A stored cupcake record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cupcake {
    /// Backend-allocated identifier, never reused
    pub id: i64,
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

/// The four data fields of a cupcake, before an id has been allocated.
///
/// Used as the input to create and update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCupcake {
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

impl NewCupcake {
    /// Attach an id, producing a full record.
    pub fn into_record(self, id: i64) -> Cupcake {
        Cupcake {
            id,
            flavor: self.flavor,
            size: self.size,
            rating: self.rating,
            image: self.image,
        }
    }
}
