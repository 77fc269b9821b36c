/// Decode logic, types, and configuration for modelcheck.
///
/// This crate contains the pure model-number decoder and the shared types
/// and configuration logic used across the modelcheck workspace. It performs
/// no I/O besides config loading; rendering lives in mc-render.

pub mod config;
pub mod error;
pub mod model;

pub use config::{DisplayConfig, OutputFormat};
pub use error::DecodeError;
pub use model::{Category, DecodedModel, decode};
