//! In-memory unit of work for development and testing
//!
//! A unit of work holds the table lock from `begin` until it commits or is
//! dropped, so units run one at a time. It works on a copy of the table,
//! written back on `commit` and discarded on drop.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::domain::{
    Domain, DomainError, DomainRepository, DomainResult, UnitOfWork, UnitOfWorkProvider,
};

#[derive(Debug, Clone)]
struct DomainTable {
    rows: BTreeMap<i32, Domain>,
    next_id: i32,
}

impl Default for DomainTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Default)]
struct UnitOfWorkCounters {
    begun: AtomicUsize,
    committed: AtomicUsize,
}

/// In-memory storage for development and testing
#[derive(Clone, Default)]
pub struct InMemoryUnitOfWorkProvider {
    table: Arc<Mutex<DomainTable>>,
    counters: Arc<UnitOfWorkCounters>,
}

impl InMemoryUnitOfWorkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the committed table. Domains without an id get the next one.
    pub fn with_domains(domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut table = DomainTable::default();
        for mut domain in domains {
            if !domain.has_identity() {
                domain.id = table.next_id;
            }
            table.next_id = table.next_id.max(domain.id + 1);
            table.rows.insert(domain.id, domain);
        }

        Self {
            table: Arc::new(Mutex::new(table)),
            counters: Arc::default(),
        }
    }

    /// Units of work opened so far
    pub fn begun_count(&self) -> usize {
        self.counters.begun.load(Ordering::SeqCst)
    }

    /// Units of work committed so far
    pub fn committed_count(&self) -> usize {
        self.counters.committed.load(Ordering::SeqCst)
    }

    /// Committed rows, ordered by id. Waits for an open unit of work to finish.
    pub async fn snapshot(&self) -> Vec<Domain> {
        self.table.lock().await.rows.values().cloned().collect()
    }
}

#[async_trait]
impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let table = self.table.clone().lock_owned().await;
        self.counters.begun.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(InMemoryUnitOfWork {
            domains: InMemoryDomainRepository::from_table((*table).clone()),
            table,
            counters: self.counters.clone(),
        }))
    }
}

pub struct InMemoryUnitOfWork {
    domains: InMemoryDomainRepository,
    /// Released on commit or drop
    table: OwnedMutexGuard<DomainTable>,
    counters: Arc<UnitOfWorkCounters>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn domains(&self) -> &dyn DomainRepository {
        &self.domains
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let InMemoryUnitOfWork {
            domains,
            mut table,
            counters,
        } = *self;
        *table = domains.into_table();
        drop(table);

        let total = counters.committed.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(committed = total, "In-memory unit of work committed");
        Ok(())
    }
}

/// Working copy of the domain table for one unit of work
pub struct InMemoryDomainRepository {
    rows: DashMap<i32, Domain>,
    next_id: AtomicI32,
}

impl InMemoryDomainRepository {
    fn from_table(table: DomainTable) -> Self {
        Self {
            rows: table.rows.into_iter().collect(),
            next_id: AtomicI32::new(table.next_id),
        }
    }

    fn into_table(self) -> DomainTable {
        DomainTable {
            rows: self.rows.into_iter().collect(),
            next_id: self.next_id.into_inner(),
        }
    }

    fn find_by_name(&self, name: &str) -> Option<Domain> {
        self.rows
            .iter()
            .find(|entry| entry.value().matches_name(name))
            .map(|entry| entry.value().clone())
    }

    fn sorted(&self, filter: impl Fn(&Domain) -> bool) -> Vec<Domain> {
        let mut domains: Vec<Domain> = self
            .rows
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        domains.sort_by_key(|d| d.id);
        domains
    }
}

#[async_trait]
impl DomainRepository for InMemoryDomainRepository {
    async fn exists(&self, name: &str) -> DomainResult<bool> {
        Ok(self.find_by_name(name).is_some())
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Domain>> {
        Ok(self.find_by_name(name))
    }

    async fn get(&self, id: i32) -> DomainResult<Option<Domain>> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self, include_wildcards: bool) -> DomainResult<Vec<Domain>> {
        Ok(self.sorted(|d| d.is_listed(include_wildcards)))
    }

    async fn get_assigned_domains(
        &self,
        content_id: i32,
        include_wildcards: bool,
    ) -> DomainResult<Vec<Domain>> {
        Ok(self.sorted(|d| {
            d.root_content_id == Some(content_id) && d.is_listed(include_wildcards)
        }))
    }

    async fn delete(&self, domain: &Domain) -> DomainResult<()> {
        self.rows
            .remove(&domain.id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound {
                entity: "Domain",
                field: "id",
                value: domain.id.to_string(),
            })
    }

    async fn add_or_update(&self, domain: &mut Domain) -> DomainResult<()> {
        domain.validate()?;

        if let Some(existing) = self.find_by_name(&domain.name) {
            if existing.id != domain.id {
                return Err(DomainError::Conflict(format!(
                    "Domain name '{}' is already assigned",
                    domain.name
                )));
            }
        }

        if !domain.has_identity() {
            domain.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        } else if !self.rows.contains_key(&domain.id) {
            return Err(DomainError::NotFound {
                entity: "Domain",
                field: "id",
                value: domain.id.to_string(),
            });
        }

        self.rows.insert(domain.id, domain.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryUnitOfWorkProvider {
        InMemoryUnitOfWorkProvider::with_domains([
            Domain::new("example.com").with_root_content(1050),
            Domain::new("*1050").with_root_content(1050),
            Domain::new("example.org").with_root_content(2000),
        ])
    }

    #[tokio::test]
    async fn test_seeded_domains_get_sequential_ids() {
        let provider = seeded();
        let ids: Vec<i32> = provider.snapshot().await.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_uncommitted_writes_are_discarded() {
        let provider = seeded();

        let uow = provider.begin().await.unwrap();
        let mut d = Domain::new("example.net");
        uow.domains().add_or_update(&mut d).await.unwrap();
        assert!(uow.domains().exists("example.net").await.unwrap());
        drop(uow);

        assert_eq!(provider.snapshot().await.len(), 3);
        assert_eq!(provider.begun_count(), 1);
        assert_eq!(provider.committed_count(), 0);
    }

    #[tokio::test]
    async fn test_commit_publishes_writes() {
        let provider = seeded();

        let uow = provider.begin().await.unwrap();
        let mut d = Domain::new("example.net");
        uow.domains().add_or_update(&mut d).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(d.id, 4);
        assert_eq!(provider.snapshot().await.len(), 4);
        assert_eq!(provider.committed_count(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_units_keep_both_writes() {
        let provider = InMemoryUnitOfWorkProvider::new();

        let first = provider.begin().await.unwrap();
        let other = provider.clone();
        let second = tokio::spawn(async move {
            let uow = other.begin().await.unwrap();
            let mut d = Domain::new("b.example");
            uow.domains().add_or_update(&mut d).await.unwrap();
            uow.commit().await.unwrap();
            d.id
        });
        tokio::task::yield_now().await;

        let mut a = Domain::new("a.example");
        first.domains().add_or_update(&mut a).await.unwrap();
        first.commit().await.unwrap();
        let b_id = second.await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b_id, 2);
        let names: Vec<String> = provider.snapshot().await.into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["a.example", "b.example"]);
        assert_eq!(provider.committed_count(), 2);
    }

    #[tokio::test]
    async fn test_dropped_unit_releases_table() {
        let provider = InMemoryUnitOfWorkProvider::new();
        drop(provider.begin().await.unwrap());

        let uow = tokio::time::timeout(std::time::Duration::from_millis(100), provider.begin())
            .await
            .expect("table still locked")
            .unwrap();
        uow.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_conflicts() {
        let provider = seeded();
        let uow = provider.begin().await.unwrap();

        let mut d = Domain::new("EXAMPLE.com");
        let err = uow.domains().add_or_update(&mut d).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(d.id, 0);
    }

    #[tokio::test]
    async fn test_update_keeps_own_name() {
        let provider = seeded();
        let uow = provider.begin().await.unwrap();

        let mut d = uow.domains().get(1).await.unwrap().unwrap();
        d.root_content_id = Some(3000);
        uow.domains().add_or_update(&mut d).await.unwrap();

        let reloaded = uow.domains().get(1).await.unwrap().unwrap();
        assert_eq!(reloaded.root_content_id, Some(3000));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let provider = seeded();
        let uow = provider.begin().await.unwrap();

        let mut d = Domain::new("example.net");
        d.id = 99;
        let err = uow.domains().add_or_update(&mut d).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let provider = seeded();
        let uow = provider.begin().await.unwrap();

        let mut d = Domain::new("example.net");
        d.id = 99;
        assert!(uow.domains().delete(&d).await.is_err());
    }

    #[tokio::test]
    async fn test_assigned_domains_filter_by_content_and_wildcard() {
        let provider = seeded();
        let uow = provider.begin().await.unwrap();
        let repo = uow.domains();

        let all = repo.get_assigned_domains(1050, true).await.unwrap();
        assert_eq!(all.len(), 2);

        let hosts = repo.get_assigned_domains(1050, false).await.unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].name, "example.com");

        assert!(repo.get_assigned_domains(4242, true).await.unwrap().is_empty());
    }
}
