//! Domain repository interface

use async_trait::async_trait;

use super::model::Domain;
use crate::domain::DomainResult;

/// Data access for [`Domain`] entities, bound to one unit of work.
///
/// Implementations enforce:
/// - case-insensitive name lookups
/// - unique names (`Conflict` on insert or rename onto an existing name)
/// - `NotFound` when updating or deleting an unknown id
/// - `Validation` for a blank name
/// - listings ordered by id
#[async_trait]
pub trait DomainRepository: Send + Sync {
    async fn exists(&self, name: &str) -> DomainResult<bool>;
    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Domain>>;
    async fn get(&self, id: i32) -> DomainResult<Option<Domain>>;
    async fn get_all(&self, include_wildcards: bool) -> DomainResult<Vec<Domain>>;
    async fn get_assigned_domains(
        &self,
        content_id: i32,
        include_wildcards: bool,
    ) -> DomainResult<Vec<Domain>>;
    async fn delete(&self, domain: &Domain) -> DomainResult<()>;
    /// Insert when `domain.id == 0` (the new id is written back), update otherwise.
    async fn add_or_update(&self, domain: &mut Domain) -> DomainResult<()>;
}
