//! Storage abstraction layer
//!
//! The SeaORM unit of work lives in `infrastructure::database`; this module
//! holds the in-memory one.

pub mod memory;

pub use memory::{InMemoryDomainRepository, InMemoryUnitOfWork, InMemoryUnitOfWorkProvider};
