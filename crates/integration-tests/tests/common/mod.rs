//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use idqueue_core::port::SequentialIdProvider;
use idqueue_core::{IdentifiedQueue, Item};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per binary (`RUST_LOG=idqueue_core=trace` to see events)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Queue with deterministic `q-1`, `q-2`, ... ids
pub fn sequential_queue() -> IdentifiedQueue {
    init_tracing();
    IdentifiedQueue::with_id_provider(Arc::new(SequentialIdProvider::new("q")))
}

/// Items `{id: "item1"}` .. `{id: "item5"}`
pub fn fixture_items() -> Vec<Item> {
    (1..=5).map(|n| Item::with_id(format!("item{}", n))).collect()
}

/// Identifiers of the queue members, in order
pub fn identifiers(queue: &IdentifiedQueue) -> Vec<String> {
    queue
        .queue()
        .iter()
        .map(|member| member.identifier().to_string())
        .collect()
}
