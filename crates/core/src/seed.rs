//! Default conversion rules loaded once at startup.

use crate::conversion::CreateConversionRule;
use crate::engine::ConversionEngine;
use crate::error::CoreError;

/// `(from_unit, to_unit, convert_factor, addend)` for each default rule.
pub const DEFAULT_RULES: &[(&str, &str, f64, Option<f64>)] = &[
    ("meter", "foot", 3.28084, None),
    ("celsius", "fahrenheit", 1.8, Some(32.0)),
    ("kilometer", "mile", 0.621371, None),
];

/// Create every rule in [`DEFAULT_RULES`] through the engine.
///
/// Rules that already exist (in either orientation) are left untouched, so
/// reseeding a persistent store is a no-op. Returns how many were created.
pub async fn seed_default_rules(engine: &ConversionEngine) -> Result<usize, CoreError> {
    let mut created = 0;

    for &(from_unit, to_unit, convert_factor, addend) in DEFAULT_RULES {
        let input = CreateConversionRule::new(from_unit, to_unit, convert_factor, addend);
        match engine.create_rule(&input).await {
            Ok(_) => created += 1,
            Err(CoreError::Conflict { .. }) => {
                tracing::info!(from_unit, to_unit, "Default rule already present, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(created)
}
