//! Domain core for the unit conversion service.
//!
//! Holds the conversion rule model, the [`store::RuleStore`] persistence
//! seam, and the [`engine::ConversionEngine`] that resolves rules in either
//! orientation and applies them.

pub mod conversion;
pub mod engine;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;
