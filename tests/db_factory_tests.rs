//! Tests for db::factory and repository selection.

mod support;

use std::str::FromStr;
use studyplan::db::{RepositoryFactory, RepositoryType};
use support::with_scoped_env;

#[test]
fn test_repository_type_from_str() {
    assert_eq!(RepositoryType::from_str("local").unwrap(), RepositoryType::Local);
    assert_eq!(RepositoryType::from_str("LOCAL").unwrap(), RepositoryType::Local);
    assert_eq!(RepositoryType::from_str("memory").unwrap(), RepositoryType::Local);
    assert!(RepositoryType::from_str("postgres").is_err());
}

#[test]
fn test_repository_type_from_env_default() {
    with_scoped_env(&[("REPOSITORY_TYPE", None)], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_explicit() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("local"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_unknown_falls_back_to_local() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("bogus"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_factory_creates_working_local_repository() {
    let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
    assert!(repo.health_check().await.unwrap());
}
