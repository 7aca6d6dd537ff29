//! Core domain types and logic.

pub mod bar;
pub mod period;
pub mod catalog;
pub mod metrics;
pub mod format;
pub mod dashboard;
pub mod error;
