//! cupcakes - a minimal cupcake catalog service
//!
//! JSON CRUD API plus a server-rendered homepage over one relational
//! table.

pub mod api;
pub mod cli;
pub mod config;
pub mod store;
