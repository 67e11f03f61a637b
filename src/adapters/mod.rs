//! Infrastructure adapters. Implement ports.
//!
//! HTTP API, upstream patient/note services, clock. Map errors to DomainError.

pub mod api;
pub mod clock;
pub mod http;
