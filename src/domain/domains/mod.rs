//! Domain aggregate
//!
//! Hostname-to-content bindings and their repository interface.

pub mod model;
pub mod repository;

pub use model::Domain;
pub use repository::DomainRepository;
