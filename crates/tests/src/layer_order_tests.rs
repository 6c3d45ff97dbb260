//! Layer builder flows: add, drag to reorder, remove, sync into the config.

use pretty_assertions::assert_eq;
use shared_types::{moved_order, AppErrorKind, LayerKind, LayerStack, TrainingConfig};
use uuid::Uuid;

fn ids(stack: &LayerStack, kind: LayerKind) -> Vec<Uuid> {
    stack.layers(kind).iter().map(|l| l.id).collect()
}

#[test]
fn drag_last_rnn_layer_to_top_and_sync() {
    let mut stack = LayerStack::default();
    stack.add(LayerKind::Rnn, 64).unwrap();
    let last = stack.add(LayerKind::Rnn, 32).unwrap();
    let first = stack.rnn[0].id;

    let order = moved_order(&ids(&stack, LayerKind::Rnn), last, first);
    stack.reorder(LayerKind::Rnn, &order);
    assert_eq!(stack.units(LayerKind::Rnn), vec![32, 128, 64]);

    let mut config = TrainingConfig::default();
    config.sync_layers(&stack);
    assert_eq!(config.rnn_units, vec![32, 128, 64]);
    assert_eq!(config.dense_units, vec![64]);
}

#[test]
fn reorder_of_one_kind_leaves_the_other_alone() {
    let mut stack = LayerStack::default();
    let dense_before = stack.dense.clone();
    let rnn_ids = ids(&stack, LayerKind::Rnn);
    stack.reorder(LayerKind::Rnn, &rnn_ids);
    assert_eq!(stack.dense, dense_before);
}

#[test]
fn removing_twice_reports_not_found() {
    let mut stack = LayerStack::default();
    let id = stack.rnn[0].id;
    stack.remove(LayerKind::Rnn, id).unwrap();
    let err = stack.remove(LayerKind::Rnn, id).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert!(stack.units(LayerKind::Rnn).is_empty());
}

#[test]
fn stack_roundtrips_through_json() {
    let stack = LayerStack::default();
    let json = serde_json::to_string(&stack).unwrap();
    let parsed: LayerStack = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, stack);
}
