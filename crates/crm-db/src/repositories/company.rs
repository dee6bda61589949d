//! PostgreSQL implementation of CompanyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crm_core::entities::Company;
use crm_core::error::DomainError;
use crm_core::traits::{CompanyRepository, RepoResult};
use crm_core::value_objects::Snowflake;

use crate::mappers::CompanyInsert;
use crate::models::CompanyModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CompanyRepository
///
/// Requires a unique constraint on `companies (account_id, name)`; without it
/// concurrent creators can insert duplicates and `create` never reports
/// `CompanyNameTaken`. Name matching uses the column's collation, so it is as
/// case-sensitive as the `companies.name` column is.
#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, account_id: Snowflake, id: Snowflake) -> RepoResult<Option<Company>> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, account_id, name, website, number_of_employees, created_at, updated_at
            FROM companies
            WHERE account_id = $1 AND id = $2
            ",
        )
        .bind(account_id.into_inner())
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Company::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, account_id: Snowflake, name: &str) -> RepoResult<Option<Company>> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, account_id, name, website, number_of_employees, created_at, updated_at
            FROM companies
            WHERE account_id = $1 AND name = $2
            LIMIT 1
            ",
        )
        .bind(account_id.into_inner())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Company::from))
    }

    #[instrument(skip(self))]
    async fn list_by_account(&self, account_id: Snowflake) -> RepoResult<Vec<Company>> {
        let results = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, account_id, name, website, number_of_employees, created_at, updated_at
            FROM companies
            WHERE account_id = $1
            ORDER BY name ASC, id ASC
            ",
        )
        .bind(account_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Company::from).collect())
    }

    #[instrument(skip(self, company), fields(account_id = %company.account_id, company_id = %company.id))]
    async fn create(&self, company: &Company) -> RepoResult<()> {
        let row = CompanyInsert::new(company);

        sqlx::query(
            r"
            INSERT INTO companies (id, account_id, name, website, number_of_employees, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(row.id)
        .bind(row.account_id)
        .bind(row.name)
        .bind(row.website)
        .bind(row.number_of_employees)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::CompanyNameTaken {
                account_id: company.account_id,
                name: company.name.clone(),
            })
        })?;

        Ok(())
    }
}
