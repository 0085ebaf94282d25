//! Product catalog: read and write services over a `ProductRepository`.
pub mod domain;
pub mod repository;
pub mod service;

pub use domain::ProductView;
pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::{ProductMutationService, ProductQueryService};
