//! risk-service: diabetes risk assessment from patient demographics and clinical notes,
//! laid out as a hexagon (domain core, ports, use cases, adapters).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
