//! Storage accessor functions, one pooled round trip each.
pub mod product_service;
