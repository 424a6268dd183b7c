//! Persistence seam for conversion rules.
//!
//! The store looks rules up by ordered pair only and enforces no uniqueness;
//! orientation handling and conflict checks belong to the engine.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::conversion::{ConversionRule, CreateConversionRule};
use crate::types::DbId;

/// Failure reported by the underlying storage.
#[derive(Debug, thiserror::Error)]
#[error("rule store failure: {source}")]
pub struct StoreError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl StoreError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self { source: err.into() }
    }
}

/// Storage operations the conversion engine depends on.
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Return the rule stored with exactly this `(from_unit, to_unit)` orientation.
    async fn find_exact(
        &self,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Option<ConversionRule>, StoreError>;

    /// Persist a new rule and return it with its assigned id.
    async fn insert(&self, input: &CreateConversionRule) -> Result<ConversionRule, StoreError>;

    /// Persist changes to a rule that already carries a stored id.
    async fn update(&self, rule: &ConversionRule) -> Result<ConversionRule, StoreError>;

    async fn delete(&self, rule: &ConversionRule) -> Result<(), StoreError>;

    async fn list_all(&self) -> Result<Vec<ConversionRule>, StoreError>;

    /// Report whether the backing storage is reachable.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryInner {
    last_id: DbId,
    rules: BTreeMap<DbId, ConversionRule>,
}

/// Process-local [`RuleStore`] used when no database is configured.
///
/// Thread-safe via interior `RwLock`; ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryRuleStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RuleStore for MemoryRuleStore {
    async fn find_exact(
        &self,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Option<ConversionRule>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .rules
            .values()
            .find(|r| r.from_unit == from_unit && r.to_unit == to_unit)
            .cloned())
    }

    async fn insert(&self, input: &CreateConversionRule) -> Result<ConversionRule, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let rule = ConversionRule {
            id: inner.last_id,
            from_unit: input.from_unit.clone(),
            to_unit: input.to_unit.clone(),
            convert_factor: input.convert_factor,
            addend: input.addend,
        };
        inner.rules.insert(rule.id, rule.clone());
        Ok(rule)
    }

    async fn update(&self, rule: &ConversionRule) -> Result<ConversionRule, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.rules.get_mut(&rule.id) {
            Some(stored) => {
                *stored = rule.clone();
                Ok(rule.clone())
            }
            None => Err(StoreError::new(format!(
                "conversion rule {} does not exist",
                rule.id
            ))),
        }
    }

    async fn delete(&self, rule: &ConversionRule) -> Result<(), StoreError> {
        self.inner.write().await.rules.remove(&rule.id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ConversionRule>, StoreError> {
        Ok(self.inner.read().await.rules.values().cloned().collect())
    }
}
