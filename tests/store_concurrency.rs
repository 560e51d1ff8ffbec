//! Concurrent access to the shared store.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use itemd::store::{InMemoryItemStore, ItemInput, ItemRepository};

#[test]
fn concurrent_creates_assign_unique_ids() {
    let store = Arc::new(InMemoryItemStore::seeded().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|i| {
                        store
                            .create(ItemInput::new(format!("item-{}-{}", t, i), None, i as f64))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let created = handle.join().unwrap();
        // Ids handed to one thread are increasing
        assert!(created.windows(2).all(|w| w[0] < w[1]));
        ids.extend(created);
    }

    assert_eq!(ids.len(), 400);
    assert_eq!(store.len().unwrap(), 403);
    assert_eq!(*ids.iter().max().unwrap(), 403);
    assert_eq!(*ids.iter().min().unwrap(), 4);
}

#[test]
fn concurrent_updates_and_deletes_stay_consistent() {
    let store = Arc::new(InMemoryItemStore::new());
    for i in 0..100 {
        store
            .create(ItemInput::new(format!("item-{}", i), None, 1.0))
            .unwrap();
    }

    let updater = {
        let store = store.clone();
        thread::spawn(move || {
            for id in (2..=100).step_by(2) {
                store
                    .update(id, ItemInput::new("even", Some("updated"), 2.0))
                    .unwrap();
            }
        })
    };
    let deleter = {
        let store = store.clone();
        thread::spawn(move || {
            for id in (1..=99).step_by(2) {
                store.delete(id).unwrap();
            }
        })
    };
    updater.join().unwrap();
    deleter.join().unwrap();

    let items = store.list().unwrap();
    assert_eq!(items.len(), 50);
    assert!(items.iter().all(|i| i.id % 2 == 0 && i.name == "even"));
    // Insertion order survives
    assert!(items.windows(2).all(|w| w[0].id < w[1].id));
}
