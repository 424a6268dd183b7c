//! Row mapping for the `conversion_rules` table.

use sqlx::FromRow;
use unitconv_core::conversion::ConversionRule;
use unitconv_core::types::DbId;

/// A row from the `conversion_rules` table.
#[derive(Debug, Clone, FromRow)]
pub struct ConversionRuleRow {
    pub id: DbId,
    pub from_unit: String,
    pub to_unit: String,
    pub convert_factor: f64,
    pub addend: Option<f64>,
}

impl From<ConversionRuleRow> for ConversionRule {
    fn from(row: ConversionRuleRow) -> Self {
        ConversionRule {
            id: row.id,
            from_unit: row.from_unit,
            to_unit: row.to_unit,
            convert_factor: row.convert_factor,
            addend: row.addend,
        }
    }
}
