//! Test-only helpers for building counter action scripts.

use crate::replay::{CounterAction, CounterActions};

/// Payload-free action with the given type.
pub fn named(action_type: &str) -> CounterAction {
    CounterAction::new(action_type.to_string())
}

/// `add` action carrying `amount`, built through the counter's creator.
pub fn add(amount: i64) -> CounterAction {
    CounterActions::default().add.create(amount)
}

/// Five-action script ending at 5 under the default config.
pub fn counter_script() -> Vec<CounterAction> {
    vec![
        named("increment"),
        named("increment"),
        add(5),
        named("decrement"),
        named("decrement"),
    ]
}

/// Render `actions` as the JSON array `toolbox replay` reads.
pub fn script_json(actions: &[CounterAction]) -> String {
    serde_json::to_string_pretty(actions).expect("serialize actions")
}
