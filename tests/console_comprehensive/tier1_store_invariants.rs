//! Tier 1: Record store invariants

use crate::test_utils::*;
use proptest::prelude::*;
use std::collections::HashSet;
use wewin::samples::sample_countries;
use wewin::{Country, Disposition, FieldSet, Record, RecordStore};

#[test]
fn test_add_to_empty_store_assigns_fresh_key() {
    init_tracing();
    let mut store = RecordStore::<Disposition>::new();
    let created = store
        .add(
            &FieldSet::new()
                .with("ticketType", "Query")
                .with("dispositionName", "Test"),
        )
        .unwrap();

    assert_eq!(store.len(), 1);
    assert!(!created.key.is_empty());
    assert_eq!(created.disposition_name, "Test");
    assert_eq!(store.get(created.key.as_str()), Some(&created));
}

#[test]
fn test_added_records_go_last() {
    let mut store = RecordStore::with_records(sample_countries()).unwrap();
    let created = store
        .add(&FieldSet::new().with("countryName", "Bangladesh"))
        .unwrap();
    assert_eq!(keys(store.list()).last(), Some(&created.key.to_string()));
    assert_eq!(keys(&store.list()[..3]), vec!["1", "2", "3"]);
}

#[test]
fn test_remove_absent_key_is_not_found_and_harmless() {
    let mut store = RecordStore::with_records(sample_countries()).unwrap();
    let revision = store.revision();
    let err = store.remove("42").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "country '42' not found");
    assert_eq!(store.len(), 3);
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_update_absent_key_is_not_found() {
    let mut store = RecordStore::with_records(sample_countries()).unwrap();
    let err = store
        .update("42", &FieldSet::new().with("countryName", "X"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_seed_rejects_duplicate_keys() {
    let mut countries = sample_countries();
    countries[2].key = countries[0].key.clone();
    let mut store = RecordStore::<Country>::new();
    assert!(store.seed(countries).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_unknown_field_is_rejected_on_add() {
    let mut store = RecordStore::<Country>::new();
    let err = store
        .add(&FieldSet::new().with("capital", "Delhi"))
        .unwrap_err();
    assert!(err.validation_errors().unwrap().message_for("capital").is_some());
    assert!(store.is_empty());
}

proptest! {
    #[test]
    fn prop_keys_stay_unique_across_adds(names in proptest::collection::vec("[A-Za-z ]{1,12}", 1..40)) {
        let mut store = RecordStore::with_records(sample_countries()).unwrap();
        for name in &names {
            store.add(&FieldSet::new().with("countryName", name.as_str())).unwrap();
        }
        let unique: HashSet<String> = keys(store.list()).into_iter().collect();
        prop_assert_eq!(unique.len(), store.len());
        prop_assert_eq!(store.len(), 3 + names.len());
    }

    #[test]
    fn prop_empty_update_is_identity(index in 0usize..3) {
        let mut store = RecordStore::with_records(sample_countries()).unwrap();
        let before = store.list()[index].clone();
        let after = store.update(before.key.as_str(), &FieldSet::new()).unwrap();
        prop_assert_eq!(&after, &before);
        prop_assert_eq!(&store.list()[index], &before);
    }

    #[test]
    fn prop_update_changes_only_given_fields(index in 0usize..3, description in "[a-z]{0,20}") {
        let mut store = RecordStore::with_records(sample_countries()).unwrap();
        let before = store.list()[index].clone();
        let after = store
            .update(before.key.as_str(), &FieldSet::new().with("description", description.as_str()))
            .unwrap();
        prop_assert_eq!(&after.key, &before.key);
        prop_assert_eq!(&after.country_name, &before.country_name);
        prop_assert_eq!(after.description, description);
    }

    #[test]
    fn prop_remove_is_complete(index in 0usize..3) {
        let mut store = RecordStore::with_records(sample_countries()).unwrap();
        let key = store.list()[index].key().clone();
        let removed = store.remove(key.as_str()).unwrap();
        prop_assert_eq!(removed.key(), &key);
        prop_assert_eq!(store.len(), 2);
        prop_assert!(!store.contains(key.as_str()));
        prop_assert!(store.list().iter().all(|c| c.key != key));
    }
}
