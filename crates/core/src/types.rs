/// Rule identifiers are PostgreSQL BIGSERIAL values.
pub type DbId = i64;
