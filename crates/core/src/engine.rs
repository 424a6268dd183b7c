//! Conversion engine: rule lookup in either orientation, application,
//! and the validation/conflict rules around rule management.

use std::sync::Arc;

use crate::conversion::{ConversionRule, CreateConversionRule, UpdateConversionRule};
use crate::error::CoreError;
use crate::store::RuleStore;

/// Resolves and applies conversion rules on top of a [`RuleStore`].
///
/// Cheap to clone; every operation is an independent unit of work against
/// the store. Conflict checks and inserts are not atomic.
#[derive(Clone)]
pub struct ConversionEngine {
    store: Arc<dyn RuleStore>,
}

impl ConversionEngine {
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health probes.
    pub fn store(&self) -> &dyn RuleStore {
        self.store.as_ref()
    }

    /// Find the rule for `(from_unit, to_unit)`, falling back to the
    /// reverse orientation.
    async fn lookup(&self, from_unit: &str, to_unit: &str) -> Result<ConversionRule, CoreError> {
        if let Some(rule) = self.store.find_exact(from_unit, to_unit).await? {
            return Ok(rule);
        }
        self.store
            .find_exact(to_unit, from_unit)
            .await?
            .ok_or_else(|| CoreError::not_found(from_unit, to_unit))
    }

    /// Convert `input_value` from `from_unit` to `to_unit`.
    ///
    /// Identical units are short-circuited by callers and never reach here.
    pub async fn convert(
        &self,
        from_unit: &str,
        to_unit: &str,
        input_value: f64,
    ) -> Result<f64, CoreError> {
        if from_unit.is_empty()
            || to_unit.is_empty()
            || !input_value.is_finite()
            || input_value <= 0.0
        {
            return Err(CoreError::Validation(
                "Incorrect value for parameter(s) for the conversion".to_string(),
            ));
        }

        let rule = self.lookup(from_unit, to_unit).await?;
        let result = rule.apply(from_unit, input_value);
        if !result.is_finite() {
            return Err(CoreError::Validation(format!(
                "Conversion of {input_value} from {from_unit} to {to_unit} is out of range"
            )));
        }

        tracing::debug!(
            rule_id = rule.id,
            from_unit,
            to_unit,
            input_value,
            result,
            direction = ?rule.direction_from(from_unit),
            "Converted value",
        );

        Ok(result)
    }

    /// Create a rule, rejecting a pair that already exists in either orientation.
    pub async fn create_rule(
        &self,
        input: &CreateConversionRule,
    ) -> Result<ConversionRule, CoreError> {
        input.check()?;

        let exists = self
            .store
            .find_exact(&input.from_unit, &input.to_unit)
            .await?
            .is_some()
            || self
                .store
                .find_exact(&input.to_unit, &input.from_unit)
                .await?
                .is_some();
        if exists {
            return Err(CoreError::conflict(&input.from_unit, &input.to_unit));
        }

        let rule = self.store.insert(input).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to insert conversion rule");
        })?;

        tracing::info!(
            rule_id = rule.id,
            from_unit = %rule.from_unit,
            to_unit = %rule.to_unit,
            "Conversion rule created",
        );

        Ok(rule)
    }

    /// Fetch the rule for a pair in either orientation.
    pub async fn retrieve_rule(
        &self,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<ConversionRule, CoreError> {
        if from_unit.is_empty() || to_unit.is_empty() {
            return Err(CoreError::Validation(
                "Incorrect value for parameter(s) for the conversion rule retrieval".to_string(),
            ));
        }
        self.lookup(from_unit, to_unit).await
    }

    pub async fn retrieve_all(&self) -> Result<Vec<ConversionRule>, CoreError> {
        Ok(self.store.list_all().await?)
    }

    /// Replace the factor and addend of the rule matching the input's pair.
    ///
    /// Id and unit names come from the stored rule, not from `input`.
    pub async fn update_rule(
        &self,
        input: &UpdateConversionRule,
    ) -> Result<ConversionRule, CoreError> {
        input.check()?;

        let mut rule = self.lookup(&input.from_unit, &input.to_unit).await?;
        rule.convert_factor = input.convert_factor;
        rule.addend = input.addend;

        let rule = self.store.update(&rule).await.inspect_err(|e| {
            tracing::error!(error = %e, rule_id = rule.id, "Failed to update conversion rule");
        })?;

        tracing::info!(
            rule_id = rule.id,
            convert_factor = rule.convert_factor,
            addend = ?rule.addend,
            "Conversion rule updated",
        );

        Ok(rule)
    }

    /// Remove the rule for a pair in either orientation.
    pub async fn delete_rule(&self, from_unit: &str, to_unit: &str) -> Result<(), CoreError> {
        if from_unit.is_empty() || to_unit.is_empty() {
            return Err(CoreError::Validation(
                "Missing parameter(s) for conversion rule removal".to_string(),
            ));
        }

        let rule = self.lookup(from_unit, to_unit).await?;
        self.store.delete(&rule).await?;

        tracing::info!(rule_id = rule.id, from_unit, to_unit, "Conversion rule deleted");
        Ok(())
    }
}
