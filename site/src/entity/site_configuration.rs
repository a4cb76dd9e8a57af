//! `SeaORM` Entity for the site_configuration table.
//!
//! This table holds **at most one row**. `singleton` is always `true` and
//! carries a unique constraint, so the database rejects a second row even
//! when two writers race.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_configuration")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub singleton: bool,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    #[sea_orm(column_type = "Text")]
    pub company_address: String,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub contact_email: String,
    pub logo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
