//! Company service
//!
//! Find-or-create of companies within an account, plus account-scoped reads.

use crm_core::entities::{Company, User};
use crm_core::{AuditLogEntry, DomainError, Snowflake};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::CreateCompanyRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Company service
pub struct CompanyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CompanyService<'a> {
    /// Create a new CompanyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a company, or return the one the account already has under that name
    ///
    /// A duplicate name is not an error: the existing record comes back
    /// unchanged and no audit entry is queued. Only a freshly inserted
    /// company is audited.
    #[instrument(skip(self, request), fields(account_id = %request.account_id, author_id = %request.author_id))]
    pub async fn create_company(&self, request: CreateCompanyRequest) -> ServiceResult<Company> {
        request.validate()?;

        let author = self
            .resolve_author(request.account_id, request.author_id)
            .await?;

        if let Some(existing) = self
            .ctx
            .company_repo()
            .find_by_name(request.account_id, &request.name)
            .await?
        {
            debug!(company_id = %existing.id, "Company already exists");
            return Ok(existing);
        }

        let company = Company::new(self.ctx.generate_id(), request.account_id, request.name)
            .with_website(request.website)
            .with_number_of_employees(request.number_of_employees);

        match self.ctx.company_repo().create(&company).await {
            Ok(()) => {}
            Err(DomainError::CompanyNameTaken { account_id, name }) => {
                // Lost the race against a concurrent creator
                debug!(name = %name, "Company created concurrently");
                return self
                    .ctx
                    .company_repo()
                    .find_by_name(account_id, &name)
                    .await?
                    .ok_or_else(|| {
                        ServiceError::persistence(format!(
                            "company '{name}' conflicted on insert but could not be read back"
                        ))
                    });
            }
            Err(e) => return Err(e.into()),
        }

        info!(company_id = %company.id, "Company created successfully");

        self.ctx
            .audit_notifier()
            .notify(AuditLogEntry::company_created(&company, &author))
            .await;

        Ok(company)
    }

    /// Get a company of the account by ID
    #[instrument(skip(self))]
    pub async fn get_company(
        &self,
        account_id: Snowflake,
        company_id: Snowflake,
    ) -> ServiceResult<Company> {
        self.ctx
            .company_repo()
            .find_by_id(account_id, company_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company", company_id.to_string()))
    }

    /// List the companies of an account, ordered by name
    #[instrument(skip(self))]
    pub async fn list_companies(&self, account_id: Snowflake) -> ServiceResult<Vec<Company>> {
        Ok(self.ctx.company_repo().list_by_account(account_id).await?)
    }

    /// Check that the account exists and the author is one of its users
    async fn resolve_author(&self, account_id: Snowflake, author_id: Snowflake) -> ServiceResult<User> {
        if self.ctx.account_repo().find_by_id(account_id).await?.is_none() {
            return Err(ServiceError::validation(format!(
                "account_id {account_id} does not reference an existing account"
            )));
        }

        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| {
                ServiceError::validation(format!(
                    "author_id {author_id} does not reference an existing user"
                ))
            })?;

        if !author.belongs_to(account_id) {
            return Err(DomainError::AuthorNotInAccount {
                author_id,
                account_id,
            }
            .into());
        }

        Ok(author)
    }
}
