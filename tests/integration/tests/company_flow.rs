//! Company creation end to end
//!
//! These tests require:
//! - Running PostgreSQL instance with the CRM schema, including a unique
//!   index on `companies (account_id, name)`
//! - Running Redis instance for the Redis audit queue tests
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test company_flow

use crm_core::AuditAction;
use crm_service::CreateCompanyRequest;
use integration_tests::{check_redis_env, check_test_env, fixtures::*, TestApp};
use serde_json::json;

// ============================================================================
// In-memory audit queue
// ============================================================================

#[tokio::test]
async fn test_create_company_persists_and_audits() {
    if !check_test_env() {
        return;
    }

    let mut app = TestApp::start().await.expect("Failed to start app");
    let seeded = seed_account(&app.pool).await.unwrap();
    let name = unique_company_name("central perk");

    let request = CreateCompanyRequest::from_json(json!({
        "account_id": seeded.account_id,
        "author_id": seeded.author_id,
        "name": name,
        "website": "https://centralperk.com",
        "number_of_employees": 3
    }))
    .unwrap();
    let company = app.companies().create_company(request).await.unwrap();

    let stored = app
        .companies()
        .get_company(seeded.account_id, company.id)
        .await
        .unwrap();
    assert_eq!(stored.name, name);
    assert_eq!(stored.website.as_deref(), Some("https://centralperk.com"));
    assert_eq!(stored.number_of_employees, Some(3));

    let jobs = app.audit_jobs();
    assert_eq!(jobs.len(), 1);
    let entry = &jobs[0].entry;
    assert_eq!(entry.action, AuditAction::CompanyCreated);
    assert_eq!(entry.author_id, seeded.author_id);
    assert_eq!(entry.author_name, "Rachel Green");
    assert!(entry.about_contact_id.is_none());
    assert!(entry.should_appear_on_dashboard);
    assert_eq!(entry.objects_json().unwrap(), json!({ "name": name }));

    cleanup_account(&app.pool, seeded.account_id).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_name_returns_existing_company() {
    if !check_test_env() {
        return;
    }

    let mut app = TestApp::start().await.expect("Failed to start app");
    let seeded = seed_account(&app.pool).await.unwrap();
    let name = unique_company_name("Lawyers Associate");

    let first = app
        .companies()
        .create_company(CreateCompanyRequest::new(seeded.account_id, seeded.author_id, &name))
        .await
        .unwrap();
    assert_eq!(app.audit_jobs().len(), 1);

    let second = app
        .companies()
        .create_company(
            CreateCompanyRequest::new(seeded.account_id, seeded.author_id, &name)
                .number_of_employees(50),
        )
        .await
        .unwrap();

    assert_eq!(second, first);
    assert!(app.audit_jobs().is_empty());
    assert_eq!(
        app.companies()
            .list_companies(seeded.account_id)
            .await
            .unwrap()
            .len(),
        1
    );

    cleanup_account(&app.pool, seeded.account_id).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creators_share_one_company() {
    if !check_test_env() {
        return;
    }

    let mut app = TestApp::start().await.expect("Failed to start app");
    let seeded = seed_account(&app.pool).await.unwrap();
    let name = unique_company_name("central perk");

    let request = CreateCompanyRequest::new(seeded.account_id, seeded.author_id, &name);
    let service = app.companies();
    let (a, b) = tokio::join!(
        service.create_company(request.clone()),
        service.create_company(request),
    );

    assert_eq!(a.unwrap().id, b.unwrap().id);
    assert_eq!(app.audit_jobs().len(), 1);

    cleanup_account(&app.pool, seeded.account_id).await.unwrap();
}

#[tokio::test]
async fn test_author_of_another_account_is_rejected() {
    if !check_test_env() {
        return;
    }

    let mut app = TestApp::start().await.expect("Failed to start app");
    let seeded = seed_account(&app.pool).await.unwrap();
    let other = seed_account(&app.pool).await.unwrap();

    let err = app
        .companies()
        .create_company(CreateCompanyRequest::new(
            seeded.account_id,
            other.author_id,
            unique_company_name("central perk"),
        ))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(app
        .companies()
        .list_companies(seeded.account_id)
        .await
        .unwrap()
        .is_empty());
    assert!(app.audit_jobs().is_empty());

    cleanup_account(&app.pool, seeded.account_id).await.unwrap();
    cleanup_account(&app.pool, other.account_id).await.unwrap();
}

// ============================================================================
// Redis audit queue
// ============================================================================

#[tokio::test]
async fn test_create_company_pushes_job_to_redis() {
    if !check_redis_env() {
        return;
    }

    let queue_key = format!("crm:test:audit_logs:{}", unique_company_name("q").replace(' ', "-"));
    let app = TestApp::start_with_redis(&queue_key)
        .await
        .expect("Failed to start app");
    let redis_audit = app.redis_audit.as_ref().expect("redis queue handle");
    let seeded = seed_account(&app.pool).await.unwrap();
    let name = unique_company_name("central perk");

    let company = app
        .companies()
        .create_company(CreateCompanyRequest::new(seeded.account_id, seeded.author_id, &name))
        .await
        .unwrap();

    // Duplicate must not push a second job
    app.companies()
        .create_company(CreateCompanyRequest::new(seeded.account_id, seeded.author_id, &name))
        .await
        .unwrap();

    assert_eq!(redis_audit.pending().await.unwrap(), 1);
    let job = redis_audit.pop().await.unwrap().expect("queued audit job");
    assert_eq!(job.entry.action, AuditAction::CompanyCreated);
    assert_eq!(job.entry.account_id, company.account_id);
    assert_eq!(job.entry.objects_json().unwrap(), json!({ "name": name }));
    assert_eq!(redis_audit.pending().await.unwrap(), 0);

    cleanup_account(&app.pool, seeded.account_id).await.unwrap();
}
