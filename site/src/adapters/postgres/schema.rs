//! Schema bootstrap
//!
//! Creates missing tables from the SeaORM entity definitions, unique
//! constraints included.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};

use crate::entity::{contact_messages, job_offers, pages, site_configuration};
use crate::error::DomainError;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    create_table(db, pages::Entity).await?;
    create_table(db, contact_messages::Entity).await?;
    create_table(db, job_offers::Entity).await?;
    create_table(db, site_configuration::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    entity: E,
) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let table = entity.table_name().to_string();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!("Ensured table {}", table);
    Ok(())
}
