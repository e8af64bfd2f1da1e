//! Common fixtures for the integration tests.

use std::sync::{Arc, Once};

use anyhow::{Context, Result};
use person_attributes::ResolverPersonAttributeDao;
use person_attributes::testing::StaticAttributeResolver;

static TRACING: Once = Once::new();

/// Directory fixture shared by the tests.
pub const DIRECTORY_JSON: &str = include_str!("fixtures/directory.json");

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Loads the directory fixture into a static resolver.
pub fn directory_resolver() -> Result<StaticAttributeResolver> {
    StaticAttributeResolver::from_json(DIRECTORY_JSON).context("Failed to parse directory fixture")
}

/// A lazily initialized DAO over the directory fixture.
pub fn directory_dao() -> Result<ResolverPersonAttributeDao> {
    init_tracing();
    let resolver = directory_resolver()?.requiring_initialization();
    Ok(ResolverPersonAttributeDao::new(Arc::new(resolver)))
}
