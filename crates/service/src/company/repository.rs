use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::company::payload::CompanyPayload;
use crate::errors::ServiceError;
use models::company;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<company::Model>, ServiceError>;
    async fn create(&self, payload: CompanyPayload) -> Result<company::Model, ServiceError>;
    /// Full replace of the three fields; `NotFound` when the id is absent.
    async fn update(
        &self,
        id: i32,
        payload: CompanyPayload,
    ) -> Result<company::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    /// Bulk insert with a single terminal commit; the rows either all land
    /// or none do.
    async fn import(&self, payloads: Vec<CompanyPayload>) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        Ok(company::list_all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        Ok(company::get_by_id(&self.db, id).await?)
    }

    async fn create(&self, payload: CompanyPayload) -> Result<company::Model, ServiceError> {
        payload.validate()?;
        Ok(company::create(&self.db, payload.into()).await?)
    }

    async fn update(
        &self,
        id: i32,
        payload: CompanyPayload,
    ) -> Result<company::Model, ServiceError> {
        payload.validate()?;
        company::update(&self.db, id, payload.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("company"))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(company::delete(&self.db, id).await?)
    }

    async fn import(&self, payloads: Vec<CompanyPayload>) -> Result<u64, ServiceError> {
        let rows = payloads.into_iter().map(Into::into).collect();
        let created = company::insert_many(&self.db, rows).await?;
        info!(created, "csv import committed");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use migration::MigratorTrait;
    use sea_orm::{ConnectOptions, Database};

    async fn repo() -> Result<SeaOrmCompanyRepository> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await?;
        migration::Migrator::up(&db, None).await?;
        Ok(SeaOrmCompanyRepository { db })
    }

    fn acme() -> CompanyPayload {
        CompanyPayload {
            name: "Acme".into(),
            email: "contact@acme.test".into(),
            website: "https://acme.test".into(),
        }
    }

    #[tokio::test]
    async fn create_validates_before_insert() -> Result<()> {
        let repo = repo().await?;
        let mut bad = acme();
        bad.email = "not-an-email".into();

        let err = repo.create(bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() -> Result<()> {
        let repo = repo().await?;
        let err = repo.update(42, acme()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn import_reports_row_count() -> Result<()> {
        let repo = repo().await?;
        let mut other = acme();
        other.name = "Globex".into();
        let created = repo.import(vec![acme(), other]).await?;
        assert_eq!(created, 2);
        assert_eq!(repo.list().await?.len(), 2);
        Ok(())
    }
}
