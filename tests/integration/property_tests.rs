//! Properties of the subject-to-record mapping.

use std::collections::BTreeMap;
use std::sync::Arc;

use person_attributes::resolver::ResolvedAttribute;
use person_attributes::testing::MockResolver;
use person_attributes::{
    AttributeQuery, AttributeSeed, AttributeValue, ErrorKind, PersonAttributeDao,
    ResolverPersonAttributeDao,
};
use proptest::prelude::*;

fn attributes_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<String>>> {
    prop::collection::btree_map(
        "[a-zA-Z][a-zA-Z0-9]{0,15}",
        prop::collection::vec(".{0,12}", 0..6),
        0..8,
    )
}

proptest! {
    #[test]
    fn prop_record_mirrors_engine_result(
        subject in ".{0,24}",
        attributes in attributes_strategy(),
    ) {
        let resolved = attributes
            .iter()
            .map(|(name, values)| {
                ResolvedAttribute::from_values(name.as_str(), values.iter().cloned())
            })
            .collect();
        let dao = ResolverPersonAttributeDao::new(Arc::new(
            MockResolver::new().expect_resolve(subject.clone(), resolved),
        ));

        let person = dao.get_person(&subject).unwrap();

        // Same subject, same key set, same value order
        prop_assert_eq!(person.name(), subject.as_str());
        prop_assert_eq!(
            person.attribute_names().collect::<Vec<_>>(),
            attributes.keys().map(String::as_str).collect::<Vec<_>>()
        );
        for (name, values) in &attributes {
            let expected: Vec<AttributeValue> = values.iter().map(|v| v.as_str().into()).collect();
            prop_assert_eq!(person.attribute_values(name), Some(expected.as_slice()));
        }
    }

    #[test]
    fn prop_unsupported_for_any_input(
        subject in ".{0,24}",
        key in "[a-z]{0,8}",
        value in ".{0,8}",
    ) {
        let dao = ResolverPersonAttributeDao::new(Arc::new(MockResolver::new()));
        let mut query = AttributeQuery::new();
        query.insert(key, value.into());

        prop_assert_eq!(dao.get_people(&query).unwrap_err().kind(), ErrorKind::Unsupported);
        prop_assert_eq!(
            dao.get_multivalued_user_attributes(&AttributeSeed::from(subject.clone()))
                .unwrap_err()
                .kind(),
            ErrorKind::Unsupported
        );
        prop_assert_eq!(
            dao.get_user_attributes(&AttributeSeed::from(query)).unwrap_err().kind(),
            ErrorKind::Unsupported
        );
    }
}
