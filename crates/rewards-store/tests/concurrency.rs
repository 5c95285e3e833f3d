//! Many threads saving and reading through one shared store.

use std::sync::Arc;
use std::thread;

use rewards_core::{Item, Receipt};
use rewards_store::{IdGenerator, ReceiptStore, SequentialIds, UuidGenerator};

fn receipt(n: u64) -> Receipt {
    Receipt {
        retailer: format!("Store {n}"),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![Item::new("Gum", "1.00")],
        total: "1.00".to_string(),
    }
}

#[test]
fn concurrent_saves_are_all_visible() {
    let store = Arc::new(ReceiptStore::new());
    let ids = Arc::new(SequentialIds::new("r"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let ids = Arc::clone(&ids);
            thread::spawn(move || {
                (0..250u64)
                    .map(|n| {
                        let id = ids.next_id();
                        store.save(&id, receipt(n), n);
                        assert_eq!(store.get_points(&id), Some(n));
                        (id, n)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let written: Vec<(String, u64)> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("writer thread panicked"))
        .collect();

    assert_eq!(written.len(), 2000);
    assert_eq!(store.len(), 2000);
    for (id, points) in written {
        assert_eq!(store.get_points(&id), Some(points));
    }
}

#[test]
fn readers_never_see_a_missing_value_for_a_saved_id() {
    let store = Arc::new(ReceiptStore::new());
    store.save("shared", receipt(0), 0);

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for n in 1..=500 {
                store.save("shared", receipt(n), n);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..500 {
                    let points = store.get_points("shared").expect("id was saved");
                    // A single writer saves increasing values.
                    assert!(points >= last);
                    last = points;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(store.get_points("shared"), Some(500));
}

#[test]
fn uuid_ids_work_as_store_keys() {
    let store = ReceiptStore::new();
    let ids = UuidGenerator;

    let first = ids.next_id();
    let second = ids.next_id();
    store.save(&first, receipt(1), 1);

    assert_ne!(first, second);
    assert_eq!(store.get_points(&first), Some(1));
    assert_eq!(store.get_points(&second), None);
}
