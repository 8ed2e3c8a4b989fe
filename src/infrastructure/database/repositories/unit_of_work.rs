//! SeaORM implementation of UnitOfWorkProvider
//!
//! One database transaction per unit of work. An uncommitted
//! `DatabaseTransaction` rolls back when dropped.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::domain::{DomainRepository, DomainResult, UnitOfWork, UnitOfWorkProvider};

use super::domain_repository::SeaOrmDomainRepository;

/// Opens a transaction on the shared connection pool for every unit of work.
///
/// ```ignore
/// let provider = SeaOrmUnitOfWorkProvider::new(db.clone());
/// let service = DomainService::new(Arc::new(provider));
/// ```
#[derive(Clone)]
pub struct SeaOrmUnitOfWorkProvider {
    db: DatabaseConnection,
}

impl SeaOrmUnitOfWorkProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkProvider for SeaOrmUnitOfWorkProvider {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let txn = self.db.begin().await?;
        Ok(Box::new(SeaOrmUnitOfWork {
            domains: SeaOrmDomainRepository::new(txn),
        }))
    }
}

pub struct SeaOrmUnitOfWork {
    domains: SeaOrmDomainRepository,
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    fn domains(&self) -> &dyn DomainRepository {
        &self.domains
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.domains.into_transaction().commit().await?;
        Ok(())
    }
}
