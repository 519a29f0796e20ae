//! Property-Based Tests for Cache Module
//!
//! Uses proptest with a manual clock to check expiry, capacity and ordering.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{CacheConfig, CacheStore, ManualClock};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_DEFAULT_TTL_MS: u64 = 300_000;

fn new_store(max_entries: usize) -> (CacheStore<String, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = CacheConfig {
        default_ttl_ms: TEST_DEFAULT_TTL_MS,
        max_entries,
    };
    (CacheStore::with_clock(config, clock.clone()), clock)
}

// == Strategies ==
/// Generates keys following the `<domain>_<qualifier>` convention
fn key_strategy() -> impl Strategy<Value = String> {
    "(vehicles|drivers|costs|invoices)_[a-z0-9]{1,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl: Option<u64> },
    Get { key: String },
    Delete { key: String },
    Advance { ms: u64 },
    Sweep,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy(), prop::option::of(0u64..2_000))
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
        (0u64..500).prop_map(|ms| CacheOp::Advance { ms }),
        Just(CacheOp::Sweep),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Expiration boundary: live one millisecond before the deadline,
    // absent one millisecond after it.
    #[test]
    fn prop_expiration_boundary(
        key in key_strategy(),
        value in value_strategy(),
        ttl in 1u64..1_000_000
    ) {
        let (mut store, clock) = new_store(TEST_MAX_ENTRIES);
        store.set(key.clone(), value.clone(), Some(ttl));

        clock.advance(ttl - 1);
        prop_assert_eq!(store.get(&key), Some(&value));

        clock.advance(2);
        prop_assert_eq!(store.get(&key), None);
    }

    // Reads never extend an entry's lifespan.
    #[test]
    fn prop_no_refresh_on_read(key in key_strategy(), ttl in 2u64..100_000) {
        let (mut store, clock) = new_store(TEST_MAX_ENTRIES);
        store.set(key.clone(), "v".to_string(), Some(ttl));

        prop_assert!(store.get(&key).is_some());
        clock.advance(ttl / 2);
        prop_assert!(store.get(&key).is_some());
        clock.advance(ttl - ttl / 2 + 1);
        prop_assert!(store.get(&key).is_none());
    }

    // The entry count never exceeds the cap after any insertion.
    #[test]
    fn prop_bounded_size(
        max_entries in 1usize..20,
        keys in prop::collection::vec(key_strategy(), 1..100)
    ) {
        let (mut store, _) = new_store(max_entries);

        for key in keys {
            store.set(key, "v".to_string(), None);
            let stats = store.stats();
            prop_assert!(stats.size <= max_entries, "size {} exceeds {}", stats.size, max_entries);
            prop_assert_eq!(stats.keys.len(), stats.size);
        }
    }

    // With N distinct keys stored, one more distinct key evicts the first.
    #[test]
    fn prop_fifo_eviction(keys in prop::collection::hash_set(key_strategy(), 3..30)) {
        let keys: Vec<String> = keys.into_iter().collect();
        let (first, rest) = keys.split_first().unwrap();
        let capacity = rest.len();
        let (mut store, _) = new_store(capacity);

        store.set(first.clone(), "first".to_string(), None);
        for key in &rest[..capacity - 1] {
            store.set(key.clone(), "v".to_string(), None);
        }
        prop_assert_eq!(store.len(), capacity);

        store.set(rest[capacity - 1].clone(), "last".to_string(), None);

        prop_assert!(!store.has(first));
        prop_assert!(store.has(&rest[0]));
        let stats = store.stats();
        prop_assert_eq!(stats.keys.first(), Some(&rest[0]));
    }

    // Overwriting resets the TTL from the time of the overwrite.
    #[test]
    fn prop_overwrite_resets_ttl(
        key in key_strategy(),
        ttl in 10u64..10_000,
        wait_pct in 1u64..100
    ) {
        let (mut store, clock) = new_store(TEST_MAX_ENTRIES);
        let wait = ttl * wait_pct / 100;

        store.set(key.clone(), "v1".to_string(), Some(ttl));
        clock.advance(wait);
        store.set(key.clone(), "v2".to_string(), Some(ttl));

        clock.advance(ttl);
        prop_assert_eq!(store.get(&key), Some(&"v2".to_string()));

        clock.advance(1);
        prop_assert_eq!(store.get(&key), None);
    }

    // Delete reports a removal exactly once.
    #[test]
    fn prop_delete_idempotence(key in key_strategy(), other in key_strategy()) {
        let (mut store, _) = new_store(TEST_MAX_ENTRIES);
        prop_assume!(key != other);

        store.set(other.clone(), "kept".to_string(), None);
        prop_assert!(!store.delete(&key));
        prop_assert_eq!(store.len(), 1);

        store.set(key.clone(), "v".to_string(), None);
        prop_assert!(store.delete(&key));
        prop_assert!(!store.delete(&key));
        prop_assert!(store.has(&other));
    }

    // Clear leaves nothing behind.
    #[test]
    fn prop_clear_empties_fully(keys in prop::collection::vec(key_strategy(), 0..50)) {
        let (mut store, _) = new_store(TEST_MAX_ENTRIES);
        for key in &keys {
            store.set(key.clone(), "v".to_string(), None);
        }

        store.clear();

        prop_assert_eq!(store.stats().size, 0);
        for key in &keys {
            prop_assert_eq!(store.get(key), None);
        }
    }

    // Random operation sequences keep storage, order and cap consistent.
    #[test]
    fn prop_operation_sequences_stay_consistent(
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let max_entries = 10;
        let (mut store, clock) = new_store(max_entries);

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => store.set(key, value, ttl),
                CacheOp::Get { key } => {
                    let _ = store.get(&key);
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(ms),
                CacheOp::Sweep => {
                    store.clean_expired();
                }
            }

            let stats = store.stats();
            prop_assert!(stats.size <= max_entries);
            prop_assert_eq!(stats.keys.len(), stats.size);
            let unique: HashSet<&String> = stats.keys.iter().collect();
            prop_assert_eq!(unique.len(), stats.keys.len(), "duplicate key in order");
        }
    }
}

// Sweep eventually reclaims an entry nobody reads again.
#[test]
fn test_sweep_reclaims_unread_entry() {
    let (mut store, clock) = new_store(TEST_MAX_ENTRIES);

    store.set("costs_monthly", "v".to_string(), Some(1));
    clock.advance(2);
    store.clean_expired();

    assert!(!store.stats().keys.contains(&"costs_monthly".to_string()));
}

#[test]
fn test_scenario_capacity_two() {
    let clock = ManualClock::new();
    let config = CacheConfig {
        default_ttl_ms: TEST_DEFAULT_TTL_MS,
        max_entries: 2,
    };
    let mut store: CacheStore<i32, ManualClock> = CacheStore::with_clock(config, clock);

    store.set("a", 1, None);
    store.set("b", 2, None);
    store.set("c", 3, None);

    assert!(!store.has("a"));
    assert_eq!(store.get("b"), Some(&2));
    assert_eq!(store.get("c"), Some(&3));
}

#[test]
fn test_scenario_expiry_across_reads() {
    let clock = ManualClock::new();
    let mut store: CacheStore<serde_json::Value, ManualClock> =
        CacheStore::with_clock(CacheConfig::default(), clock.clone());

    store.set("x", serde_json::json!({"n": 1}), Some(100));

    clock.advance(50);
    assert_eq!(store.get("x"), Some(&serde_json::json!({"n": 1})));

    clock.advance(60);
    assert_eq!(store.get("x"), None);
}
