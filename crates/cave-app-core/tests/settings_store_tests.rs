// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use cave_app_core::{ConfigService, SettingsPort};
use cave_dry_tests::InMemoryConfigStore;

#[test]
fn missing_keys_read_as_defaults() {
    let svc = ConfigService::new(InMemoryConfigStore::new());
    assert_eq!(svc.read_int("date_threshold", 0), 0);
    assert_eq!(svc.read_int("date_threshold_scheme", 3), 3);
}

#[test]
fn saved_values_are_read_back() {
    let store = InMemoryConfigStore::new();
    let svc = ConfigService::new(store.clone());
    svc.save("date_threshold", &44_000_i64).unwrap();
    assert!(store.contains_key("date_threshold"));
    assert_eq!(svc.read_int("date_threshold", 0), 44_000);
}

#[test]
fn malformed_value_falls_back_without_error() {
    let store = InMemoryConfigStore::new();
    store.put_raw("date_threshold_scheme", b"{\"not\": \"a number\"}");
    let svc = ConfigService::new(store);
    assert_eq!(svc.read_int("date_threshold_scheme", 0), 0);
}

#[test]
fn trait_object_reads_through() {
    let store = InMemoryConfigStore::with_ints(&[("date_threshold", -12)]);
    let svc = ConfigService::new(store);
    let port: &dyn SettingsPort = &svc;
    assert_eq!(port.read_int("date_threshold", 0), -12);
}
