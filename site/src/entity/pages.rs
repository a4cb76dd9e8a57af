//! `SeaORM` Entity for the pages table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title_fr: String,
    pub title_en: String,
    #[sea_orm(column_type = "Text")]
    pub content_fr: String,
    #[sea_orm(column_type = "Text")]
    pub content_en: String,
    pub meta_description_fr: String,
    pub meta_description_en: String,
    pub main_image: Option<String>,
    pub menu_order: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
