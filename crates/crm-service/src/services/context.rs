//! Service context - dependency container for services
//!
//! Holds the repositories, the audit notifier and the id generator. Every
//! dependency is passed in explicitly; services never reach for global state.

use std::sync::Arc;

use crm_common::{AppConfig, AppError, AppResult, AuditQueueBackend, ConfigError};
use crm_core::traits::{AccountRepository, AuditQueue, CompanyRepository, UserRepository};
use crm_core::{Snowflake, SnowflakeGenerator};
use crm_db::{PgAccountRepository, PgCompanyRepository, PgUserRepository};
use crm_queue::{AuditJobReceiver, ChannelAuditQueue, RedisAuditQueue, RedisPool};
use tracing::info;

use super::audit::AuditNotifier;
use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    user_repo: Arc<dyn UserRepository>,
    company_repo: Arc<dyn CompanyRepository>,

    // Audit
    audit_notifier: AuditNotifier,

    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        user_repo: Arc<dyn UserRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        audit_queue: Arc<dyn AuditQueue>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            account_repo,
            user_repo,
            company_repo,
            audit_notifier: AuditNotifier::new(audit_queue),
            snowflake_generator,
        }
    }

    /// Wire PostgreSQL repositories and the configured audit queue
    ///
    /// With the in-memory audit backend the receiving end of the queue is
    /// returned so the caller can attach a consumer.
    pub async fn connect(config: &AppConfig) -> AppResult<(Self, Option<AuditJobReceiver>)> {
        config.validate()?;

        let pool = crm_db::create_pool(&crm_db::DatabaseConfig::from(&config.database))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let (audit_queue, receiver): (Arc<dyn AuditQueue>, _) = match config.audit.backend {
            AuditQueueBackend::Memory => {
                let (queue, receiver) = ChannelAuditQueue::new();
                (Arc::new(queue), Some(receiver))
            }
            AuditQueueBackend::Redis => {
                let redis = config
                    .redis
                    .as_ref()
                    .ok_or(ConfigError::MissingVar("REDIS_URL"))?;
                let redis_pool =
                    RedisPool::from_config(redis).map_err(|e| AppError::Queue(e.to_string()))?;
                (
                    Arc::new(RedisAuditQueue::new(redis_pool, config.audit.queue_key.clone())),
                    None,
                )
            }
        };

        info!(
            audit_backend = ?config.audit.backend,
            worker_id = config.snowflake.worker_id,
            "Service context ready"
        );

        let context = ServiceContextBuilder::new()
            .account_repo(Arc::new(PgAccountRepository::new(pool.clone())))
            .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .company_repo(Arc::new(PgCompanyRepository::new(pool)))
            .audit_queue(audit_queue)
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)))
            .build()
            .map_err(AppError::from)?;

        Ok((context, receiver))
    }

    // === Repositories ===

    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn company_repo(&self) -> &dyn CompanyRepository {
        self.company_repo.as_ref()
    }

    // === Audit ===

    pub fn audit_notifier(&self) -> &AuditNotifier {
        &self.audit_notifier
    }

    // === Ids ===

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("audit_notifier", &self.audit_notifier)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    company_repo: Option<Arc<dyn CompanyRepository>>,
    audit_queue: Option<Arc<dyn AuditQueue>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn company_repo(mut self, repo: Arc<dyn CompanyRepository>) -> Self {
        self.company_repo = Some(repo);
        self
    }

    pub fn audit_queue(mut self, queue: Arc<dyn AuditQueue>) -> Self {
        self.audit_queue = Some(queue);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// The id generator defaults to worker 0; everything else is required.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.account_repo
                .ok_or_else(|| ServiceError::internal("account_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.company_repo
                .ok_or_else(|| ServiceError::internal("company_repo is required"))?,
            self.audit_queue
                .ok_or_else(|| ServiceError::internal("audit_queue is required"))?,
            self.snowflake_generator.unwrap_or_default(),
        ))
    }
}
