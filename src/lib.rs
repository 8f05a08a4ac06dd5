//! Core of a driving-license administration service.
//!
//! Regulatory enumerations with seeding and model bridging, a change audit
//! log attached to persisted records, and the declarative registry of
//! nightly maintenance jobs.

pub mod audit;
pub mod cli;
pub mod config;
pub mod conventions;
pub mod db;
pub mod enums;
pub mod i18n;
pub mod models;
pub mod schedule;
pub mod theme;
