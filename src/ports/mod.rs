//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the HTTP API into the application
//! - Outbound: Called by the application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::RiskQueryPort;
pub use outbound::{Clock, NoteLookup, PatientLookup};
