use std::collections::HashSet;
use stockz::api::{StockzApi, StockzPaths};
use stockz::codec;
use stockz::error::StockzError;
use stockz::model::{RawFields, Record};
use stockz::store::memory::InMemoryStore;

fn setup() -> StockzApi<InMemoryStore> {
    StockzApi::new(InMemoryStore::new(), StockzPaths::new(".stockz"))
}

fn fields(id: &str, name: &str, category: &str, quantity: &str, price: &str) -> RawFields {
    RawFields {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity: quantity.to_string(),
        price: price.to_string(),
        location: String::new(),
    }
}

fn assert_unique_ids(records: &[Record]) {
    let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), records.len(), "duplicate ids in {:?}", records);
}

#[test]
fn bolt_lifecycle() {
    let mut api = setup();

    api.add_record(&fields("", "Bolt", "Hardware", "10", "0.5"))
        .unwrap();
    let added = api.records()[0].clone();
    assert_eq!(added.id, "1");
    assert!(!added.created_at.is_empty());

    api.update_record("1", &fields("1", "Bolt", "Hardware", "5", "0.5"))
        .unwrap();
    let updated = &api.records()[0];
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.created_at, added.created_at);

    api.delete_record("1").unwrap();
    assert!(api.records().is_empty());
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let mut api = setup();
    let attempts = [
        ("", "A"),
        ("", "B"),
        ("2", "dup"),
        ("7", "C"),
        ("", "D"),
        ("7", "dup again"),
    ];
    for (id, name) in attempts {
        let _ = api.add_record(&fields(id, name, "x", "1", "1"));
        assert_unique_ids(api.records());
    }

    // rename 1 -> 7 collides, rename 1 -> 9 is fine
    assert!(api
        .update_record("1", &fields("7", "A", "x", "1", "1"))
        .is_err());
    api.update_record("1", &fields("9", "A", "x", "1", "1"))
        .unwrap();
    assert_unique_ids(api.records());

    let ids: Vec<&str> = api.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "2", "7", "4"]);
}

#[test]
fn created_at_survives_id_change() {
    let mut api = setup();
    api.add_record(&fields("A", "Nut", "Hardware", "1", "0.1"))
        .unwrap();
    let created = api.records()[0].created_at.clone();

    api.update_record("A", &fields("B", "Nut", "Hardware", "2", "0.2"))
        .unwrap();
    api.update_record("B", &fields("C", "Nut", "Hardware", "3", "0.3"))
        .unwrap();

    assert_eq!(api.records()[0].id, "C");
    assert_eq!(api.records()[0].created_at, created);
}

#[test]
fn failed_mutations_change_nothing() {
    let mut api = setup();
    api.add_record(&fields("1", "Bolt", "Hardware", "10", "0.5"))
        .unwrap();
    api.add_record(&fields("2", "Nut", "Hardware", "3", "0.1"))
        .unwrap();
    let before = api.records().to_vec();

    assert!(api
        .add_record(&fields("1", "Other", "x", "1", "1"))
        .is_err());
    assert!(api
        .add_record(&fields("", "", "x", "1", "1"))
        .is_err());
    assert!(api
        .update_record("2", &fields("1", "Nut", "Hardware", "3", "0.1"))
        .is_err());
    assert!(api
        .update_record("2", &fields("2", "Nut", "Hardware", "-3", "0.1"))
        .is_err());
    assert!(matches!(
        api.update_record("3", &fields("3", "X", "x", "1", "1")),
        Err(StockzError::NotFound(_))
    ));
    assert!(matches!(
        api.delete_record("3"),
        Err(StockzError::NotFound(_))
    ));
    assert!(matches!(
        api.delete_record("  "),
        Err(StockzError::NotFound(_))
    ));

    assert_eq!(api.records(), before.as_slice());
    assert!(api.is_dirty());
}

#[test]
fn dirty_flag_follows_mutations_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.csv");
    let mut api = setup();

    api.open(&path).unwrap();
    assert!(!api.is_dirty());

    assert!(api.add_record(&fields("", "", "", "", "")).is_err());
    assert!(!api.is_dirty());

    api.add_record(&fields("", "Bolt", "Hardware", "1", "1"))
        .unwrap();
    assert!(api.is_dirty());

    api.save_file(&path).unwrap();
    assert!(!api.is_dirty());
}

#[test]
fn file_round_trip_through_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.csv");

    let mut api = setup();
    api.add_record(&fields("", "Bolt, zinc", "Hardware", "10", "0,5"))
        .unwrap();
    api.add_record(&fields("", "Glue \"fast\"", "Adhesives", "0", "12.99"))
        .unwrap();
    api.save_file(&path).unwrap();

    let mut reopened = setup();
    reopened.open(&path).unwrap();
    assert_eq!(reopened.records(), api.records());
}

#[test]
fn rejected_file_keeps_current_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(
        &path,
        "id,name,category,quantity,price,location,created_at\n\
         1,Bolt,Hardware,10,0.5,,t\n\
         2,Nut,Hardware,abc,0.1,,t\n",
    )
    .unwrap();

    let mut api = setup();
    api.add_record(&fields("", "Keep me", "x", "1", "1"))
        .unwrap();
    let before = api.records().to_vec();

    assert!(matches!(
        api.import_file(&path),
        Err(StockzError::Parse { .. })
    ));
    assert_eq!(api.records(), before.as_slice());
}

#[test]
fn view_is_filtered_then_sorted_with_per_column_memory() {
    let mut api = setup();
    api.add_record(&fields("", "Hex bolt", "Hardware", "10", "0.5"))
        .unwrap();
    api.add_record(&fields("", "Drill", "Tools", "2", "89"))
        .unwrap();
    api.add_record(&fields("", "Carriage bolt", "Hardware", "4", "0.75"))
        .unwrap();
    api.add_record(&fields("", "Bolt cutter", "Tools", "1", "35"))
        .unwrap();

    let names = |api: &mut StockzApi<InMemoryStore>, keys: &[&str]| -> Vec<String> {
        api.list_records("BOLT", keys)
            .unwrap()
            .listed_records
            .into_iter()
            .map(|r| r.name)
            .collect()
    };

    assert_eq!(
        names(&mut api, &[]),
        vec!["Hex bolt", "Carriage bolt", "Bolt cutter"]
    );
    assert_eq!(
        names(&mut api, &["price"]),
        vec!["Hex bolt", "Carriage bolt", "Bolt cutter"]
    );
    assert_eq!(
        names(&mut api, &["price"]),
        vec!["Bolt cutter", "Carriage bolt", "Hex bolt"]
    );
    // name starts ascending no matter what price did
    assert_eq!(
        names(&mut api, &["name"]),
        vec!["Bolt cutter", "Carriage bolt", "Hex bolt"]
    );

    let stored: Vec<&str> = api.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(stored, vec!["Hex bolt", "Drill", "Carriage bolt", "Bolt cutter"]);
}

#[test]
fn flattened_rows_follow_header_order() {
    let mut api = setup();
    api.add_record(&fields("", "Bolt", "Hardware", "10", "0.5"))
        .unwrap();
    let rows = api.list_records::<&str>("", &[]).unwrap().rows(2);
    assert_eq!(rows[0][..6], ["1", "Bolt", "Hardware", "10", "0.50", ""]);
    assert_eq!(rows[0][6], api.records()[0].created_at);
}

#[test]
fn encode_decode_round_trip_is_lossless() {
    let records = vec![
        Record {
            id: "x-1".into(),
            name: "Washer, flat".into(),
            category: "Hardware".into(),
            quantity: 0,
            price: 0.1 + 0.2,
            location: "".into(),
            created_at: "".into(),
        },
        Record {
            id: "2".into(),
            name: "Tape".into(),
            category: "Packing".into(),
            quantity: u64::from(u32::MAX),
            price: 1e-9,
            location: "Aisle \"7\"".into(),
            created_at: "opaque token".into(),
        },
    ];
    let decoded = codec::decode(&codec::encode(&records).unwrap()).unwrap();
    assert_eq!(decoded, records);
}
