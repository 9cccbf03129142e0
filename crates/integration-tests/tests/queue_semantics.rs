//! Queue identity and mutation semantics
//!
//! Exercises the public surface of `IdentifiedQueue`: FIFO adds, duplicate-id
//! rejection and removal by user id or generated queue id.

mod common;

use common::{fixture_items, identifiers, sequential_queue};
use idqueue_core::{AddOutcome, IdentifiedQueue, Item, QueueSnapshot};
use serde_json::{json, Value};

/// Members as JSON without their generated queue ids
fn user_view(snapshot: &QueueSnapshot) -> Vec<Value> {
    snapshot.iter().map(|member| member.item().to_value()).collect()
}

#[test]
fn test_blank_queue() {
    let queue = IdentifiedQueue::new();

    assert!(queue.queue().is_empty());
    assert!(queue.head().is_none());
}

#[test]
fn test_adds_keep_call_order() {
    let items = fixture_items();
    let mut queue = sequential_queue();

    for item in &items[..3] {
        queue.add(item.clone());
    }
    assert_eq!(
        user_view(&queue.queue()),
        vec![json!({"id": "item1"}), json!({"id": "item2"}), json!({"id": "item3"})]
    );

    queue.add(items[3].clone());
    assert_eq!(identifiers(&queue), vec!["item1", "item2", "item3", "item4"]);
}

#[test]
fn test_add_into_blank_queue() {
    let mut queue = sequential_queue();
    queue.add(fixture_items()[3].clone());

    assert_eq!(user_view(&queue.queue()), vec![json!({"id": "item4"})]);
    assert_eq!(queue.head().and_then(|m| m.id()), Some("item4"));
}

#[test]
fn test_generated_id_removes_item_added_without_id() {
    let mut queue = sequential_queue();
    let before = queue.queue();

    let generated = queue.add(Item::new().field("name", "noIdItem"));
    assert_eq!(user_view(&queue.queue()), vec![json!({"name": "noIdItem"})]);

    queue.remove_by_id(&generated);
    assert_eq!(queue.queue(), before);
}

#[test]
fn test_duplicate_id_leaves_queue_unchanged() {
    let mut queue = sequential_queue();
    for item in &fixture_items()[..3] {
        queue.add(item.clone());
    }
    let before = queue.queue();

    let outcome = queue.insert(Item::with_id("item1").field("name", "item1"));

    assert!(!outcome.is_inserted());
    assert_eq!(queue.queue(), before);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_remove_matching_id() {
    let mut queue = sequential_queue();
    for item in &fixture_items()[..3] {
        queue.add(item.clone());
    }

    queue.remove_by_id("item1");

    assert_eq!(identifiers(&queue), vec!["item2", "item3"]);
}

#[test]
fn test_remove_non_existent_id() {
    let mut queue = sequential_queue();
    for item in &fixture_items()[..3] {
        queue.add(item.clone());
    }
    let before = queue.queue();

    queue.remove_by_id("IDNonExists");

    assert_eq!(queue.queue(), before);
}

#[test]
fn test_remove_by_returned_identifiers() {
    let items = fixture_items();
    let mut queue = sequential_queue();

    queue.add(items[0].clone());
    let second = queue.add(items[1].clone());
    assert_eq!(second, "item2");

    queue.remove_by_id(&second);
    assert_eq!(identifiers(&queue), vec!["item1"]);

    let no_id = Item::from_value(json!({"name": "noIdItem", "id": null})).unwrap();
    let generated = queue.add(no_id);
    assert_eq!(
        user_view(&queue.queue()),
        vec![json!({"id": "item1"}), json!({"name": "noIdItem"})]
    );

    queue.remove_by_id(&generated);
    assert_eq!(identifiers(&queue), vec!["item1"]);
}

#[test]
fn test_generated_queue_id_and_undefined_id() {
    let mut queue = sequential_queue();
    let no_id = Item::from_value(json!({"name": "noIdItem", "id": null})).unwrap();

    let identifier = queue.add(no_id);

    let snapshot = queue.queue();
    assert_eq!(snapshot.get(0).unwrap().queue_id(), identifier);
    assert_eq!(snapshot.get(0).unwrap().id(), None);
}

#[test]
fn test_every_member_gets_a_distinct_queue_id() {
    let mut queue = IdentifiedQueue::new();
    for _ in 0..50 {
        queue.add(Item::new());
    }
    for item in fixture_items() {
        queue.add(item);
    }

    let mut queue_ids: Vec<&str> = Vec::new();
    let snapshot = queue.queue();
    for member in &snapshot {
        assert!(!member.queue_id().is_empty());
        queue_ids.push(member.queue_id());
    }
    queue_ids.sort_unstable();
    queue_ids.dedup();
    assert_eq!(queue_ids.len(), 55);
}

#[test]
fn test_remove_middle_member_preserves_relative_order() {
    let mut queue = sequential_queue();
    for item in fixture_items() {
        queue.add(item);
    }

    queue.remove_by_id("item3");

    assert_eq!(identifiers(&queue), vec!["item1", "item2", "item4", "item5"]);
}

#[test]
fn test_insert_reports_generated_queue_id() {
    let mut queue = sequential_queue();

    let outcome = queue.insert(Item::with_id("item1"));

    assert_eq!(
        outcome,
        AddOutcome::Inserted {
            identifier: "item1".to_string(),
            queue_id: "q-1".to_string(),
        }
    );
}

#[test]
fn test_snapshot_serializes_with_queue_ids() -> anyhow::Result<()> {
    let mut queue = sequential_queue();
    queue.add(Item::from_value(json!({"id": "item1", "name": "first"}))?);
    queue.add(Item::from_value(json!({"name": "second"}))?);

    assert_eq!(
        serde_json::to_value(queue.queue())?,
        json!([
            {"queueId": "q-1", "id": "item1", "name": "first"},
            {"queueId": "q-2", "name": "second"}
        ])
    );
    Ok(())
}
