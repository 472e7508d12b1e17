//! End-to-end fixture scenario: a hundred seeded records driven through the
//! listing and lookup ports, with window and lookup arguments arriving via
//! simulated requests the way a CRUD screen would supply them.

use fixture::adapters::memory_store::FixtureStore;
use fixture::crud::RecordAdapter;
use fixture::fields::record_fields;
use fixture::{CrudSource, Record};
use mock_request::{with_json_request, with_request};

fn seeded_store() -> FixtureStore {
    FixtureStore::seeded((0..100).map(|n| Record::new(n.to_string(), format!("Line number {}", n))))
}

#[test]
fn hundred_record_scenario() {
    let mut store = seeded_store();
    assert_eq!(store.len(), 100);

    // Window into the tail: only 5 of the requested 10 exist.
    let tail = store.content(95, 10);
    let ids: Vec<&str> = tail.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["95", "96", "97", "98", "99"]);

    let line42 = store.find("42").expect("record 42 present");
    assert_eq!(line42.value, "Line number 42");

    let mut adapter = RecordAdapter::new(&mut store, line42);
    assert!(adapter.delete());
    assert_eq!(store.len(), 99);
    assert!(store.find("42").is_none());
}

#[test]
fn list_window_driven_by_request_params() {
    let store = seeded_store();
    let page = with_request(
        "/records",
        &[("start", "95"), ("count", "10")],
        |ctx| {
            let start = ctx
                .param("start")
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
            let count = ctx
                .param("count")
                .and_then(|s| s.parse().ok())
                .unwrap_or(20);
            store.find_for_list(start, count)
        },
    )
    .expect("request builds");

    assert_eq!(page.len(), 5);
    assert_eq!(page[0].value, "Line number 95");
    assert_eq!(page[4].value, "Line number 99");
}

#[test]
fn lookup_driven_by_request_param() {
    let store = seeded_store();
    let found = with_request("/records/view", &[("id", "42")], |ctx| {
        ctx.param("id").and_then(|id| store.find_for_param(&id))
    })
    .expect("request builds");
    assert_eq!(found.map(|r| r.value), Some("Line number 42".to_string()));

    let missing = with_request("/records/view", &[("id", "420")], |ctx| {
        ctx.param("id").and_then(|id| store.find_for_param(&id))
    })
    .expect("request builds");
    assert!(missing.is_none());
}

#[test]
fn edit_submission_updates_through_field_setters() {
    let mut store = seeded_store();
    let submitted = Record::new("42", "Line number 42 (edited)");

    // Simulate an edit form POST: the JSON body carries the new field
    // values, which flow through the field descriptors onto the record.
    let updated = with_json_request("/records/edit", &[("id", "42")], &submitted, |ctx| {
        let body: Record = serde_json::from_str(ctx.body()).expect("record body");
        let id = ctx.param("id").expect("id param");
        let mut record = store.find(&id).expect("existing record");
        for field in record_fields() {
            if field.name() != "id" {
                field.set(&mut record, field.get(&body));
            }
        }
        record
    })
    .expect("request builds");

    let mut adapter = RecordAdapter::new(&mut store, updated);
    assert!(adapter.validate().is_empty());
    assert!(adapter.save());
    assert_eq!(adapter.primary_key_as_string(), "42");

    assert_eq!(store.len(), 100);
    assert_eq!(
        store.find("42").map(|r| r.value),
        Some("Line number 42 (edited)".to_string())
    );
}
