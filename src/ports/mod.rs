//! Port traits decoupling the domain from providers and configuration.

pub mod data_port;
pub mod config_port;
