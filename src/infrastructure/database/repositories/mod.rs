//! Database repository implementations
//!
//! SeaORM domain repository + transaction-scoped unit of work.

pub mod domain_repository;
pub mod unit_of_work;

pub use domain_repository::SeaOrmDomainRepository;
pub use unit_of_work::{SeaOrmUnitOfWork, SeaOrmUnitOfWorkProvider};
