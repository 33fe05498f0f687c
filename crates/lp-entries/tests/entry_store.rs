use std::collections::HashSet;

use lp_core::Id;
use lp_entries::*;
use proptest::prelude::*;

#[test]
fn custom_volume_round_trip() {
    let mut store = EntryStore::with_defaults().unwrap();
    let id = store.entries()[0].id;

    store.set_volume(id, Volume::Custom).unwrap();
    assert_eq!(store.get(id).unwrap().custom_volume.as_deref(), Some(""));

    store.set_custom_volume(id, "750").unwrap();
    assert_eq!(store.get(id).unwrap().custom_volume.as_deref(), Some("750"));

    store.set_volume(id, Volume::Standard(330)).unwrap();
    assert_eq!(store.get(id).unwrap().custom_volume, None);

    store.set_volume(id, Volume::Custom).unwrap();
    assert_eq!(
        store.get(id).unwrap().custom_volume.as_deref(),
        Some(""),
        "stale custom value must not come back"
    );
}

#[test]
fn custom_volume_is_stored_even_without_custom_selection() {
    let mut store = EntryStore::with_defaults().unwrap();
    let id = store.entries()[1].id;

    store.set_volume(id, Volume::Standard(600)).unwrap();
    store.set_custom_volume(id, "123").unwrap();

    let entry = store.get(id).unwrap();
    assert_eq!(entry.volume, Volume::Standard(600));
    assert_eq!(entry.custom_volume.as_deref(), Some("123"));
    assert_eq!(entry.volume_text().as_deref(), Some("600"));
}

#[test]
fn price_is_kept_verbatim() {
    let mut store = EntryStore::with_defaults().unwrap();
    let id = store.entries()[2].id;

    store.set_price(id, " 12,50 abc").unwrap();
    assert_eq!(store.get(id).unwrap().price, " 12,50 abc");
}

#[test]
fn snapshot_is_detached_from_store() {
    let mut store = EntryStore::with_defaults().unwrap();
    let id = store.entries()[0].id;
    let snapshot = store.snapshot();

    store.set_price(id, "9.99").unwrap();

    assert_eq!(snapshot[0].price, "");
    assert_eq!(store.get(id).unwrap().price, "9.99");
}

#[test]
fn removing_down_to_minimum() {
    let mut store = EntryStore::new(3, 2).unwrap();
    let first = store.entries()[0].id;
    let second = store.entries()[1].id;

    store.remove_entry(first).unwrap();
    assert_eq!(store.len(), 2);
    assert!(!store.can_remove());

    let err = store.remove_entry(second).unwrap_err();
    assert_eq!(err, EntryError::MinimumEntries { min: 2 });
    assert_eq!(store.len(), 2);
    assert!(store.get(second).is_some());
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), (0usize..16).prop_map(Op::Remove)]
}

proptest! {
    #[test]
    fn ids_stay_unique_across_add_remove(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut store = EntryStore::with_defaults().unwrap();
        let mut ever_issued: HashSet<Id> = store.entries().iter().map(|e| e.id).collect();

        for op in ops {
            match op {
                Op::Add => {
                    let id = store.add_entry().unwrap();
                    prop_assert!(ever_issued.insert(id), "id {} issued twice", id);
                }
                Op::Remove(slot) => {
                    let id = store.entries()[slot % store.len()].id;
                    let before = store.len();
                    match store.remove_entry(id) {
                        Ok(_) => prop_assert_eq!(store.len(), before - 1),
                        Err(EntryError::MinimumEntries { .. }) => {
                            prop_assert_eq!(store.len(), before);
                        }
                        Err(other) => prop_assert!(false, "unexpected error: {}", other),
                    }
                }
            }

            prop_assert!(store.len() >= store.min_entries());
            let live: HashSet<Id> = store.entries().iter().map(|e| e.id).collect();
            prop_assert_eq!(live.len(), store.len());
        }
    }
}
