//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod conversion_rule_repo;

pub use conversion_rule_repo::ConversionRuleRepo;
