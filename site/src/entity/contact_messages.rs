//! `SeaORM` Entity for the contact_messages table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub cv_file: Option<String>,
    /// One of commercial, candidature, information, autre
    pub contact_type: String,
    /// One of new, read, replied, archived
    pub status: String,
    pub received_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
