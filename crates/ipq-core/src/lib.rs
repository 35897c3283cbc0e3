//! Core domain + application logic for the IP quality bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the external
//! IP services live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod formatting;
pub mod interaction;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod report;
pub mod reputation;
pub mod risk;
pub mod validate;

pub use errors::{Error, Result};
