//! Application services

pub mod domain_service;

pub use domain_service::DomainService;
