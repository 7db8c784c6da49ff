//! HTTP surface of the song catalog
//!
//! Library exports for the binary and the integration tests.

pub mod app;
pub mod backend;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
