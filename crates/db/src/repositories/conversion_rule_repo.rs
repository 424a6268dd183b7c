//! Repository for the `conversion_rules` table.

use sqlx::PgPool;
use unitconv_core::conversion::CreateConversionRule;
use unitconv_core::types::DbId;

use crate::models::conversion_rule::ConversionRuleRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, from_unit, to_unit, convert_factor, addend";

/// Provides CRUD operations for conversion rules.
pub struct ConversionRuleRepo;

impl ConversionRuleRepo {
    /// Find the rule stored with exactly this orientation.
    pub async fn find_by_units(
        pool: &PgPool,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Option<ConversionRuleRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM conversion_rules
             WHERE from_unit = $1 AND to_unit = $2
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, ConversionRuleRow>(&query)
            .bind(from_unit)
            .bind(to_unit)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new rule, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateConversionRule,
    ) -> Result<ConversionRuleRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO conversion_rules (from_unit, to_unit, convert_factor, addend)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConversionRuleRow>(&query)
            .bind(&input.from_unit)
            .bind(&input.to_unit)
            .bind(input.convert_factor)
            .bind(input.addend)
            .fetch_one(pool)
            .await
    }

    /// Replace the factor and addend of a rule. Unit names are left alone.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_factor(
        pool: &PgPool,
        id: DbId,
        convert_factor: f64,
        addend: Option<f64>,
    ) -> Result<Option<ConversionRuleRow>, sqlx::Error> {
        let query = format!(
            "UPDATE conversion_rules SET
                convert_factor = $2,
                addend = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConversionRuleRow>(&query)
            .bind(id)
            .bind(convert_factor)
            .bind(addend)
            .fetch_optional(pool)
            .await
    }

    /// List all rules in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ConversionRuleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conversion_rules ORDER BY id");
        sqlx::query_as::<_, ConversionRuleRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a rule by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM conversion_rules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
