//! Concrete adapter implementations for ports.

pub mod yahoo_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod chart_svg;
pub mod web;
