//! End-to-end behavior of save, find_by_id and search over the in-memory backend.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use docshelf::{memory::InMemoryStore, prelude::*};
use serde_json::json;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
}

fn manager(clock: &ManualClock) -> DocumentManager<InMemoryStore> {
    DocumentManagerBuilder::new().clock(clock.clone()).build(InMemoryStore::new())
}

fn doc(title: &str, content: &str, author_id: &str) -> Document {
    Document::new(title, content, Author::new(author_id, format!("Author {author_id}")))
}

fn sorted_ids(documents: Vec<Document>) -> Vec<String> {
    let mut ids = documents.into_iter().map(|d| d.id).collect::<Vec<_>>();
    ids.sort();
    ids
}

#[test]
fn save_assigns_unique_ids_and_preserves_created() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);

    let first = manager.save(doc("Hello", "x", "a1")).unwrap();
    let second = manager.save(doc("Hello", "x", "a1")).unwrap();
    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);

    clock.advance(TimeDelta::minutes(10));
    let resaved = manager
        .save(Document {
            content: "updated".into(),
            created: Some(start() + TimeDelta::days(1)),
            ..first.clone()
        })
        .unwrap();

    assert_eq!(resaved.id, first.id);
    assert_eq!(resaved.created, Some(start()));
    assert_eq!(manager.len().unwrap(), 2);
}

#[test]
fn find_by_id_round_trips_saved_document() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);

    assert_eq!(manager.find_by_id("never-saved").unwrap(), None);

    let saved = manager.save(doc("Hello", "x", "a1")).unwrap();

    assert_eq!(manager.find_by_id(&saved.id).unwrap(), Some(saved));
}

#[test]
fn search_without_criteria_returns_everything() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let a = manager.save(doc("Hello", "x", "a1")).unwrap();
    let b = manager.save(doc("Hi", "y", "a2")).unwrap();

    let expected = sorted_ids(vec![a, b]);

    assert_eq!(sorted_ids(manager.search(None).unwrap()), expected);
    assert_eq!(sorted_ids(manager.search(Some(&SearchRequest::new())).unwrap()), expected);
}

#[test]
fn search_on_empty_store_is_empty() {
    let manager = DocumentManager::new(InMemoryStore::new());

    assert!(manager.search(None).unwrap().is_empty());
    assert!(manager.is_empty().unwrap());
}

#[test]
fn title_prefix_excludes_non_matching_titles() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let hello = manager.save(doc("Hello world", "x", "a1")).unwrap();
    manager.save(doc("Hi", "x", "a1")).unwrap();

    let request = SearchRequest {
        title_prefixes: Some(vec!["Hello".into()]),
        ..SearchRequest::new()
    };

    assert_eq!(manager.search(Some(&request)).unwrap(), vec![hello]);
}

#[test]
fn title_prefixes_are_alternatives() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let hello = manager.save(doc("Hello", "x", "a1")).unwrap();
    let hi = manager.save(doc("Hi", "x", "a1")).unwrap();
    manager.save(doc("Bye", "x", "a1")).unwrap();

    let request = SearchRequest {
        title_prefixes: Some(vec!["Hel".into(), "Hi".into()]),
        ..SearchRequest::new()
    };

    assert_eq!(
        sorted_ids(manager.search(Some(&request)).unwrap()),
        sorted_ids(vec![hello, hi])
    );
}

#[test]
fn created_bounds_are_inclusive() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let t1 = start();
    let t2 = start() + TimeDelta::hours(1);

    clock.set(t1 - TimeDelta::milliseconds(1));
    manager.save(doc("before", "x", "a1")).unwrap();
    clock.set(t1);
    let at_t1 = manager.save(doc("at t1", "x", "a1")).unwrap();
    clock.set(t1 + TimeDelta::minutes(30));
    let inside = manager.save(doc("inside", "x", "a1")).unwrap();
    clock.set(t2);
    let at_t2 = manager.save(doc("at t2", "x", "a1")).unwrap();
    clock.set(t2 + TimeDelta::milliseconds(1));
    manager.save(doc("after", "x", "a1")).unwrap();

    let request = SearchRequest {
        created_from: Some(t1),
        created_to: Some(t2),
        ..SearchRequest::new()
    };

    assert_eq!(
        sorted_ids(manager.search(Some(&request)).unwrap()),
        sorted_ids(vec![at_t1, inside, at_t2])
    );
}

#[test]
fn open_ended_bounds() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let early = manager.save(doc("early", "x", "a1")).unwrap();
    clock.advance(TimeDelta::days(1));
    let late = manager.save(doc("late", "x", "a1")).unwrap();

    let from = SearchRequest {
        created_from: Some(start() + TimeDelta::hours(1)),
        ..SearchRequest::new()
    };
    let to = SearchRequest {
        created_to: Some(start() + TimeDelta::hours(1)),
        ..SearchRequest::new()
    };

    assert_eq!(manager.search(Some(&from)).unwrap(), vec![late]);
    assert_eq!(manager.search(Some(&to)).unwrap(), vec![early]);
}

#[test]
fn author_and_content_filters_combine_with_and() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let both = manager.save(doc("t", "has foo inside", "a1")).unwrap();
    manager.save(doc("t", "has foo inside", "a2")).unwrap();
    manager.save(doc("t", "nothing here", "a1")).unwrap();

    let request = SearchRequest {
        author_ids: Some(vec!["a1".into()]),
        contains_contents: Some(vec!["foo".into()]),
        ..SearchRequest::new()
    };

    assert_eq!(manager.search(Some(&request)).unwrap(), vec![both]);
}

#[test]
fn empty_filter_list_matches_nothing() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    manager.save(doc("Hello", "foo", "a1")).unwrap();

    for request in [
        SearchRequest { title_prefixes: Some(vec![]), ..SearchRequest::new() },
        SearchRequest { contains_contents: Some(vec![]), ..SearchRequest::new() },
        SearchRequest { author_ids: Some(vec![]), ..SearchRequest::new() },
    ] {
        assert!(manager.search(Some(&request)).unwrap().is_empty(), "{request:?}");
    }
}

#[test]
fn absent_filter_list_places_no_constraint() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let saved = manager.save(doc("Hello", "foo", "a1")).unwrap();

    let request = SearchRequest {
        title_prefixes: None,
        contains_contents: None,
        author_ids: None,
        ..SearchRequest::new()
    };

    assert_eq!(manager.search(Some(&request)).unwrap(), vec![saved]);
}

#[test]
fn updated_fields_are_searchable() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let saved = manager.save(doc("Draft", "x", "a1")).unwrap();
    manager
        .save(Document { title: "Final".into(), ..saved })
        .unwrap();

    let drafts = SearchRequest {
        title_prefixes: Some(vec!["Draft".into()]),
        ..SearchRequest::new()
    };
    let finals = SearchRequest {
        title_prefixes: Some(vec!["Final".into()]),
        ..SearchRequest::new()
    };

    assert!(manager.search(Some(&drafts)).unwrap().is_empty());
    assert_eq!(manager.search(Some(&finals)).unwrap().len(), 1);
}

#[test]
fn raw_query_supports_negation() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    manager.save(doc("Hello", "x", "a1")).unwrap();
    let other = manager.save(doc("Hello", "x", "a2")).unwrap();

    let expr = Filter::eq(DocumentField::AuthorId, "a1").not();

    assert_eq!(manager.query(Some(&expr)).unwrap(), vec![other]);
}

#[test]
fn search_request_from_json() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let saved = manager.save(doc("Hello", "x", "a1")).unwrap();
    manager.save(doc("Hello", "x", "a2")).unwrap();

    let request = SearchRequest::from_json(json!({
        "authorIds": ["a1"],
        "createdFrom": "2024-01-15T08:30:00Z",
        "createdTo": "2024-01-15T08:30:00Z",
    }))
    .unwrap();

    assert_eq!(manager.search(Some(&request)).unwrap(), vec![saved]);
}

#[test]
fn saved_document_survives_json_round_trip() {
    let clock = ManualClock::new(start());
    let mut manager = manager(&clock);
    let saved = manager.save(doc("Hello", "x", "a1")).unwrap();

    let restored = Document::from_json(saved.to_json().unwrap()).unwrap();

    assert_eq!(restored, saved);
}

#[test]
fn manager_can_be_shared_across_threads() {
    use std::sync::{Arc, Mutex};

    let clock = ManualClock::new(start());
    let shared = Arc::new(Mutex::new(manager(&clock)));

    let workers = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                shared
                    .lock()
                    .unwrap()
                    .save(doc(&format!("Doc {i}"), "x", "a1"))
                    .unwrap()
            })
        })
        .collect::<Vec<_>>();

    for worker in workers {
        let saved = worker.join().unwrap();
        assert_eq!(saved.created, Some(start()));
    }

    assert_eq!(shared.lock().unwrap().len().unwrap(), 4);
}
