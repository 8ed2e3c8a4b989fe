//! Domain service: host name bindings for multi-site routing
//!
//! Every operation runs in its own unit of work: begin, one repository call,
//! commit. `save` and `delete` are bracketed by a cancellable before-event
//! and an after-event raised once the write is committed.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    Attempt, CancellableEventArgs, Domain, DomainEvents, DomainResult, EventArgs, EventMessages,
    OperationStatus, UnitOfWorkProvider,
};

/// Service for domain operations
pub struct DomainService {
    uow_provider: Arc<dyn UnitOfWorkProvider>,
    events: DomainEvents,
}

impl DomainService {
    pub fn new(uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            uow_provider,
            events: DomainEvents::new(),
        }
    }

    /// Observer lists for `saving`, `saved`, `deleting` and `deleted`
    pub fn events(&self) -> &DomainEvents {
        &self.events
    }

    pub async fn exists(&self, name: &str) -> DomainResult<bool> {
        let uow = self.uow_provider.begin().await?;
        let exists = uow.domains().exists(name).await?;
        uow.commit().await?;

        debug!(name, exists, "Domain existence checked");
        Ok(exists)
    }

    pub async fn get_by_name(&self, name: &str) -> DomainResult<Option<Domain>> {
        let uow = self.uow_provider.begin().await?;
        let domain = uow.domains().get_by_name(name).await?;
        uow.commit().await?;
        Ok(domain)
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<Option<Domain>> {
        let uow = self.uow_provider.begin().await?;
        let domain = uow.domains().get(id).await?;
        uow.commit().await?;
        Ok(domain)
    }

    pub async fn get_all(&self, include_wildcards: bool) -> DomainResult<Vec<Domain>> {
        let uow = self.uow_provider.begin().await?;
        let domains = uow.domains().get_all(include_wildcards).await?;
        uow.commit().await?;

        debug!(include_wildcards, count = domains.len(), "Domains listed");
        Ok(domains)
    }

    /// Domains bound to the content node `content_id`
    pub async fn get_assigned_domains(
        &self,
        content_id: i32,
        include_wildcards: bool,
    ) -> DomainResult<Vec<Domain>> {
        let uow = self.uow_provider.begin().await?;
        let domains = uow
            .domains()
            .get_assigned_domains(content_id, include_wildcards)
            .await?;
        uow.commit().await?;

        debug!(
            content_id,
            include_wildcards,
            count = domains.len(),
            "Assigned domains listed"
        );
        Ok(domains)
    }

    /// Insert or update `domain`. On insert the new id is written back.
    ///
    /// Returns a failed attempt with status `Cancelled` when a `saving`
    /// observer cancels; nothing is written in that case.
    pub async fn save(&self, domain: &mut Domain) -> DomainResult<Attempt<OperationStatus>> {
        let mut saving = CancellableEventArgs::new(domain.clone(), EventMessages::new());
        if self.events.saving.is_raised_event_cancelled(&mut saving) {
            warn!(name = %domain.name, "Domain save cancelled by observer");
            return Ok(OperationStatus::cancelled(saving.into_messages()));
        }

        let uow = self.uow_provider.begin().await?;
        uow.domains().add_or_update(domain).await?;
        uow.commit().await?;

        info!(domain_id = domain.id, name = %domain.name, "Domain saved");

        let mut saved = EventArgs::new(domain.clone(), saving.into_messages());
        self.events.saved.raise(&mut saved);

        Ok(OperationStatus::success(saved.into_messages()))
    }

    /// Remove `domain`, which must exist.
    ///
    /// Returns a failed attempt with status `Cancelled` when a `deleting`
    /// observer cancels; the domain is left untouched in that case.
    pub async fn delete(&self, domain: &Domain) -> DomainResult<Attempt<OperationStatus>> {
        let mut deleting = CancellableEventArgs::new(domain.clone(), EventMessages::new());
        if self.events.deleting.is_raised_event_cancelled(&mut deleting) {
            warn!(domain_id = domain.id, name = %domain.name, "Domain delete cancelled by observer");
            return Ok(OperationStatus::cancelled(deleting.into_messages()));
        }

        let uow = self.uow_provider.begin().await?;
        uow.domains().delete(domain).await?;
        uow.commit().await?;

        info!(domain_id = domain.id, name = %domain.name, "Domain deleted");

        let mut deleted = EventArgs::new(domain.clone(), deleting.into_messages());
        self.events.deleted.raise(&mut deleted);

        Ok(OperationStatus::success(deleted.into_messages()))
    }
}

// ── Tests ──────────────────────────────────────────────────────
