//! # Domain Registry
//!
//! Host name bindings ("domains") for multi-site content routing.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: the `Domain` entity, repository and unit-of-work traits,
//!   observer events and operation results
//! - **application**: `DomainService`
//! - **infrastructure**: SeaORM persistence, migrations, in-memory storage
//! - **config** / **logging**: TOML configuration and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryUnitOfWorkProvider, SeaOrmUnitOfWorkProvider,
};

pub use application::DomainService;
pub use domain::{Domain, DomainError, DomainResult};
