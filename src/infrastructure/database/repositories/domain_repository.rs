//! SeaORM implementation of DomainRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{Domain, DomainError, DomainRepository, DomainResult};
use crate::infrastructure::database::entities::domain;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: domain::Model) -> Domain {
    Domain {
        id: m.id,
        name: m.name,
        root_content_id: m.root_content_id,
        language_id: m.language_id,
    }
}

/// `lower(name) = lower(?)`; host names are ASCII so SQLite's `lower` is enough
fn name_equals(name: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(domain::Column::Name))).eq(name.to_ascii_lowercase())
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Domain",
        field: "id",
        value: id.to_string(),
    }
}

fn duplicate(name: &str) -> DomainError {
    DomainError::Conflict(format!("Domain name '{}' is already assigned", name))
}

// ── SeaOrmDomainRepository ──────────────────────────────────────

/// Domain repository bound to one database transaction.
pub struct SeaOrmDomainRepository {
    txn: DatabaseTransaction,
}

impl SeaOrmDomainRepository {
    pub fn new(txn: DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn into_transaction(self) -> DatabaseTransaction {
        self.txn
    }

    async fn find_by_name(
        &self,
        name: &str,
        excluding_id: Option<i32>,
    ) -> DomainResult<Option<domain::Model>> {
        let mut query = domain::Entity::find().filter(name_equals(name));
        if let Some(id) = excluding_id {
            query = query.filter(domain::Column::Id.ne(id));
        }
        Ok(query.one(&self.txn).await?)
    }
}

#[async_trait]
impl DomainRepository for SeaOrmDomainRepository {
    async fn exists(&self, name: &str) -> DomainResult<bool> {
        Ok(self.find_by_name(name, None).await?.is_some())
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Domain>> {
        Ok(self.find_by_name(name, None).await?.map(entity_to_domain))
    }

    async fn get(&self, id: i32) -> DomainResult<Option<Domain>> {
        let model = domain::Entity::find_by_id(id).one(&self.txn).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all(&self, include_wildcards: bool) -> DomainResult<Vec<Domain>> {
        let models = domain::Entity::find()
            .order_by_asc(domain::Column::Id)
            .all(&self.txn)
            .await?;
        Ok(models
            .into_iter()
            .map(entity_to_domain)
            .filter(|d| d.is_listed(include_wildcards))
            .collect())
    }

    async fn get_assigned_domains(
        &self,
        content_id: i32,
        include_wildcards: bool,
    ) -> DomainResult<Vec<Domain>> {
        let models = domain::Entity::find()
            .filter(domain::Column::RootContentId.eq(content_id))
            .order_by_asc(domain::Column::Id)
            .all(&self.txn)
            .await?;
        Ok(models
            .into_iter()
            .map(entity_to_domain)
            .filter(|d| d.is_listed(include_wildcards))
            .collect())
    }

    async fn delete(&self, d: &Domain) -> DomainResult<()> {
        let result = domain::Entity::delete_by_id(d.id).exec(&self.txn).await?;
        if result.rows_affected == 0 {
            return Err(not_found(d.id));
        }
        debug!(domain_id = d.id, name = %d.name, "Domain row deleted");
        Ok(())
    }

    async fn add_or_update(&self, d: &mut Domain) -> DomainResult<()> {
        d.validate()?;

        if !d.has_identity() {
            if self.find_by_name(&d.name, None).await?.is_some() {
                return Err(duplicate(&d.name));
            }

            let model = domain::ActiveModel {
                id: NotSet,
                name: Set(d.name.clone()),
                root_content_id: Set(d.root_content_id),
                language_id: Set(d.language_id),
            };
            let inserted = model.insert(&self.txn).await?;
            d.id = inserted.id;
            debug!(domain_id = d.id, name = %d.name, "Domain row inserted");
            return Ok(());
        }

        if domain::Entity::find_by_id(d.id).one(&self.txn).await?.is_none() {
            return Err(not_found(d.id));
        }
        if self.find_by_name(&d.name, Some(d.id)).await?.is_some() {
            return Err(duplicate(&d.name));
        }

        let model = domain::ActiveModel {
            id: Set(d.id),
            name: Set(d.name.clone()),
            root_content_id: Set(d.root_content_id),
            language_id: Set(d.language_id),
        };
        model.update(&self.txn).await?;
        debug!(domain_id = d.id, name = %d.name, "Domain row updated");
        Ok(())
    }
}
