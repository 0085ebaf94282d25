//! Service layer for the product catalog.
//! - `db` holds the storage accessor: one pooled round trip per call.
//! - `product` exposes the query and mutation services behind a repository trait.
//! - Errors are normalised into `ServiceError` so the HTTP layer can map them.

pub mod errors;
pub mod db;
pub mod product;
#[cfg(test)]
pub mod test_support;
