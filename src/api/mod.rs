//! HTTP request handling for the cupcake service.
//!
//! Maps the six endpoints (five JSON, one HTML homepage) onto record
//! store operations. Handlers hold no state across requests beyond the
//! shared store handle.

mod errors;
mod pages;
mod request;
mod response;
mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use request::CupcakePayload;
pub use response::{CreateResponse, HealthResponse, ListResponse, MessageResponse, SingleResponse};
pub use server::ApiServer;
