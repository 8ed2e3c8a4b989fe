//! Domain entity - host name bindings for multi-site routing

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "domains")]
pub struct Model {
    /// Unique domain ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Host name (e.g., "example.com", "example.com/en", "*1050")
    #[sea_orm(unique)]
    pub name: String,

    /// Content node the domain is bound to
    pub root_content_id: Option<i32>,

    pub language_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
