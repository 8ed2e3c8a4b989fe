//! Unit-of-work traits for the domain layer
//!
//! Contains:
//! - `UnitOfWorkProvider` — opens a transactional scope
//! - `UnitOfWork` — the scope itself, handing out repositories bound to it
//! - `DomainResult` — standard result type for domain operations

use async_trait::async_trait;

use super::domains::DomainRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Opens units of work.
///
/// ```ignore
/// let uow = provider.begin().await?;
/// let found = uow.domains().exists("example.com").await?;
/// uow.commit().await?;
/// ```
#[async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}

/// A transactional scope over one or more repository calls.
///
/// Dropping a unit of work without calling [`UnitOfWork::commit`] discards
/// every write made through it.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Domain repository bound to this unit of work
    fn domains(&self) -> &dyn DomainRepository;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}
