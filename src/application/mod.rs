//! Application layer - use cases over the domain repository

pub mod services;

pub use services::DomainService;
