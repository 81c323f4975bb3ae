//! Core domain types and logic.

pub mod record;
pub mod engine;
pub mod summary;
pub mod clients;
pub mod config_validation;
pub mod error;
