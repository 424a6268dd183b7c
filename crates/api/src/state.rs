use unitconv_core::engine::ConversionEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the engine holds its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Conversion engine over the configured rule store.
    pub engine: ConversionEngine,
}
