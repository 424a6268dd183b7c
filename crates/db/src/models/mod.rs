//! Database row structs.
//!
//! Rows are mapped into the domain types from `unitconv_core` at the
//! repository boundary.

pub mod conversion_rule;
