//! Test helpers for integration tests
//!
//! Builds a fully wired [`ServiceContext`] from the environment and keeps a
//! side pool around for seeding and cleanup.

use anyhow::Result;
use crm_common::{try_init_tracing, AppConfig, AuditQueueBackend};
use crm_db::PgPool;
use crm_queue::{AuditJobReceiver, RedisAuditQueue, RedisPool};
use crm_service::{CompanyService, ServiceContext};

/// Wired services plus the handles tests need to observe side effects
pub struct TestApp {
    pub ctx: ServiceContext,
    pub pool: PgPool,
    /// Receiving end of the in-memory audit queue
    pub audit: Option<AuditJobReceiver>,
    /// Separate handle on the Redis audit list, for inspection
    pub redis_audit: Option<RedisAuditQueue>,
}

impl TestApp {
    /// Start with the in-memory audit queue
    pub async fn start() -> Result<Self> {
        let mut config = test_config()?;
        config.audit.backend = AuditQueueBackend::Memory;
        Self::start_with_config(config).await
    }

    /// Start with the Redis audit queue on a list key private to the caller
    pub async fn start_with_redis(queue_key: &str) -> Result<Self> {
        let mut config = test_config()?;
        config.audit.backend = AuditQueueBackend::Redis;
        config.audit.queue_key = queue_key.to_string();
        Self::start_with_config(config).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let _ = try_init_tracing();

        let (ctx, audit) = ServiceContext::connect(&config).await?;
        let pool = crm_db::create_pool(&crm_db::DatabaseConfig::from(&config.database)).await?;

        let redis_audit = match (config.audit.backend, config.redis.as_ref()) {
            (AuditQueueBackend::Redis, Some(redis)) => Some(RedisAuditQueue::new(
                RedisPool::from_config(redis)?,
                config.audit.queue_key.clone(),
            )),
            _ => None,
        };

        Ok(Self {
            ctx,
            pool,
            audit,
            redis_audit,
        })
    }

    pub fn companies(&self) -> CompanyService<'_> {
        CompanyService::new(&self.ctx)
    }

    /// Drain the in-memory audit queue
    pub fn audit_jobs(&mut self) -> Vec<crm_queue::AuditJob> {
        self.audit
            .as_mut()
            .map(AuditJobReceiver::drain)
            .unwrap_or_default()
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Helper to check if the database is configured
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Helper to check if both the database and Redis are configured
pub fn check_redis_env() -> bool {
    if !check_test_env() {
        return false;
    }
    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }
    true
}
