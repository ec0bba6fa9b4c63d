//! Data models for customer records and configuration.

pub mod config;
pub mod record;
