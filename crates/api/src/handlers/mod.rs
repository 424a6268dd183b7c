//! Request handlers.
//!
//! Handlers delegate to the [`ConversionEngine`](unitconv_core::engine::ConversionEngine)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod conversion;
