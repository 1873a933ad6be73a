//! # SynesthesiaComposer Common Library
//!
//! Shared code for the SynesthesiaComposer crates including:
//! - Error and result types
//! - Input kind vocabulary
//! - Session event types and the EventBus
//! - Configuration loading
//! - Logging setup

pub mod config;
pub mod error;
pub mod events;
pub mod input_kind;
pub mod logging;

pub use error::{Error, Result};
pub use input_kind::InputKind;
