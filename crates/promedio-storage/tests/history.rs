use promedio_storage::{AverageStore, InMemoryAverageStore, SavedAverage};

#[test]
fn trait_object_keeps_history_across_saves() {
    let mut store: Box<dyn AverageStore> = Box::new(InMemoryAverageStore::new());

    let first = store.save(12.0);
    let second = store.save(16.5);
    assert_eq!(first, "average 12.00 saved as avg-1");
    assert_eq!(second, "average 16.50 saved as avg-2");

    let listed = store.list(10);
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|e| e.id == "avg-1"));

    let stats = store.stats();
    assert_eq!(stats["count"], 2);
    assert_eq!(stats["last_mean"], 16.5);
}

#[test]
fn saved_entries_round_trip_through_serde() {
    let mut store = InMemoryAverageStore::new();
    let _ = store.save(13.45);

    let listed = store.list(1);
    let encoded = serde_json::to_string(&listed).expect("encode history");
    let decoded: Vec<SavedAverage> = serde_json::from_str(&encoded).expect("decode history");
    assert_eq!(decoded, listed);
}
