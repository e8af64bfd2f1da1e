//! End-to-end lookups through the resolver-backed DAO.

use std::sync::Arc;

use anyhow::Result;
use person_attributes::resolver::{
    ByteAttributeValue, EmptyAttributeValue, ResolutionFailure, ResolvedAttribute,
    ScopedStringAttributeValue, StringAttributeValue,
};
use person_attributes::testing::MockResolver;
use person_attributes::{
    AdapterConfig, AttributeSeed, AttributeValue, ErrorKind, InitState, PersonAttributeDao,
    ResolverPersonAttributeDao,
};

use crate::common::{directory_dao, directory_resolver, init_tracing};

#[test]
fn test_fixture_lookup() -> Result<()> {
    let dao = directory_dao()?;

    let alice = dao.get_person("alice")?;
    assert_eq!(alice.name(), "alice");
    assert_eq!(
        alice.attribute_names().collect::<Vec<_>>(),
        vec!["groups", "mail", "uidNumber"]
    );
    assert_eq!(
        alice.attribute_values("groups"),
        Some(&[AttributeValue::from("staff"), AttributeValue::from("admin")][..])
    );
    assert_eq!(alice.attribute_value("uidNumber"), Some(&AttributeValue::Integer(1001)));
    assert_eq!(dao.state(), InitState::Ready);

    Ok(())
}

#[test]
fn test_subject_without_attributes_is_not_an_error() -> Result<()> {
    let dao = directory_dao()?;

    let person = dao.get_person("svc-backup")?;
    assert!(person.attributes().is_empty());

    Ok(())
}

#[test]
fn test_unknown_subject_fails() -> Result<()> {
    let dao = directory_dao()?;

    let err = dao.get_person("ghost").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert_eq!(
        err.resolution_error().map(|e| e.failure()),
        Some(ResolutionFailure::NoSuchSubject)
    );
    assert!(!err.is_retriable());

    Ok(())
}

#[test]
fn test_dao_as_trait_object() -> Result<()> {
    init_tracing();
    let dao: Arc<dyn PersonAttributeDao> =
        Arc::new(ResolverPersonAttributeDao::new(Arc::new(directory_resolver()?)));

    assert_eq!(
        dao.get_person("bob")?.attribute_value("mail"),
        Some(&AttributeValue::from("bob@example.org"))
    );
    assert!(dao.get_user_attributes(&AttributeSeed::from("bob")).unwrap_err().is_unsupported());

    Ok(())
}

#[test]
fn test_mixed_value_holders() -> Result<()> {
    init_tracing();
    let mock = MockResolver::new().expect_resolve(
        "carol",
        vec![
            ResolvedAttribute::new("eduPersonPrincipalName")
                .with_value(ScopedStringAttributeValue::new("carol", "example.org")),
            ResolvedAttribute::new("userCertificate")
                .with_value(ByteAttributeValue::new(vec![0x30, 0x82, 0x01])),
            ResolvedAttribute::new("description")
                .with_value(StringAttributeValue::new("first"))
                .with_value(EmptyAttributeValue::ZeroLengthValue)
                .with_value(EmptyAttributeValue::NullValue)
                .with_value(AttributeValue::Bool(true)),
        ],
    );
    let dao = ResolverPersonAttributeDao::new(Arc::new(mock));

    let carol = dao.get_person("carol")?;

    assert_eq!(
        carol.attribute_value("eduPersonPrincipalName"),
        Some(&AttributeValue::from("carol"))
    );
    assert_eq!(
        carol.attribute_value("userCertificate").and_then(AttributeValue::as_bytes),
        Some(&[0x30, 0x82, 0x01][..])
    );
    assert_eq!(
        carol.attribute_values("description"),
        Some(
            &[
                AttributeValue::from("first"),
                AttributeValue::from(""),
                AttributeValue::Null,
                AttributeValue::Bool(true),
            ][..]
        )
    );

    Ok(())
}

#[test]
fn test_eager_config_surfaces_misconfiguration() {
    init_tracing();
    let mock = Arc::new(MockResolver::new().failing_initialize("attribute-resolver.xml not found"));

    let err = ResolverPersonAttributeDao::with_config(
        mock.clone(),
        AdapterConfig::builder().name("shibboleth").initialize_eagerly(true).build(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.initialization_error().map(|e| e.component_id()), Some("mock"));
    assert_eq!(mock.initialize_count(), 1);
    assert_eq!(mock.resolve_count(), 0);
}

#[test]
fn test_failed_initialization_blocks_every_lookup() {
    init_tracing();
    let mock = Arc::new(MockResolver::new().failing_initialize("no data connectors"));
    let dao = ResolverPersonAttributeDao::new(mock.clone());

    for subject in ["alice", "bob", "alice"] {
        let err = dao.get_person(subject).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.initialization_error().map(|e| e.message()), Some("no data connectors"));
    }

    assert_eq!(dao.state(), InitState::Failed);
    assert_eq!(mock.initialize_count(), 1);
    assert_eq!(mock.resolve_count(), 0);
}
