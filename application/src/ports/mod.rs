//! Ports: the interfaces the application layer depends on.

pub mod provider_gateway;
pub mod status;
