//! Test vectors for the NIST P-256 base field.

pub mod field;
