//! [`RuleStore`] implementation backed by PostgreSQL.

use async_trait::async_trait;
use unitconv_core::conversion::{ConversionRule, CreateConversionRule};
use unitconv_core::store::{RuleStore, StoreError};

use crate::repositories::ConversionRuleRepo;
use crate::DbPool;

/// Adapts [`ConversionRuleRepo`] to the engine's storage contract.
#[derive(Clone)]
pub struct PgRuleStore {
    pool: DbPool,
}

impl PgRuleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RuleStore for PgRuleStore {
    async fn find_exact(
        &self,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Option<ConversionRule>, StoreError> {
        let row = ConversionRuleRepo::find_by_units(&self.pool, from_unit, to_unit)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(ConversionRule::from))
    }

    async fn insert(&self, input: &CreateConversionRule) -> Result<ConversionRule, StoreError> {
        let row = ConversionRuleRepo::create(&self.pool, input)
            .await
            .map_err(StoreError::new)?;
        Ok(row.into())
    }

    async fn update(&self, rule: &ConversionRule) -> Result<ConversionRule, StoreError> {
        ConversionRuleRepo::update_factor(&self.pool, rule.id, rule.convert_factor, rule.addend)
            .await
            .map_err(StoreError::new)?
            .map(ConversionRule::from)
            .ok_or_else(|| StoreError::new(format!("conversion rule {} does not exist", rule.id)))
    }

    async fn delete(&self, rule: &ConversionRule) -> Result<(), StoreError> {
        let deleted = ConversionRuleRepo::delete(&self.pool, rule.id)
            .await
            .map_err(StoreError::new)?;
        if !deleted {
            tracing::warn!(rule_id = rule.id, "Conversion rule already removed");
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ConversionRule>, StoreError> {
        let rows = ConversionRuleRepo::list(&self.pool)
            .await
            .map_err(StoreError::new)?;
        Ok(rows.into_iter().map(ConversionRule::from).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::new)
    }
}
