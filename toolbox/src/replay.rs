//! Counter slice and action replay for `toolbox replay`.
//!
//! The counter is a small slice built with [`slice_reducer`]: `increment`,
//! `decrement` and `reset` are payload-free, `add` carries an `i64`.
//! Replaying folds an action script through it, optionally freezing the
//! counter after a number of dispatches.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::locker::Locker;
use crate::io::actions::load_actions;
use crate::io::config::ReplayConfig;
use crate::redux::action::{
    Action, EmptyActionCreator, PayloadActionCreator, Typed, action_creator,
    payload_action_creator,
};
use crate::redux::reducer::{BoundReducer, SliceBuilder, slice_reducer};

/// Actions understood by the counter. Types are plain strings so scripts stay
/// readable JSON.
pub type CounterAction = Action<String, i64>;

/// Action creators for the counter slice.
#[derive(Debug, Clone)]
pub struct CounterActions {
    pub increment: EmptyActionCreator<String>,
    pub decrement: EmptyActionCreator<String>,
    pub reset: EmptyActionCreator<String>,
    pub add: PayloadActionCreator<String, i64, i64>,
}

impl Default for CounterActions {
    fn default() -> Self {
        Self {
            increment: action_creator("increment".to_string()),
            decrement: action_creator("decrement".to_string()),
            reset: action_creator("reset".to_string()),
            add: payload_action_creator("add".to_string(), |amount: i64| amount),
        }
    }
}

/// Build the counter reducer for `cfg`. Arithmetic saturates at the `i64`
/// bounds.
pub fn counter_reducer(cfg: &ReplayConfig) -> BoundReducer<i64, CounterAction> {
    let actions = CounterActions::default();
    let step = cfg.step;
    let initial = cfg.initial;
    let warn_unhandled = cfg.warn_unhandled;

    slice_reducer(cfg.initial).build(|slice: &mut SliceBuilder<i64, CounterAction>| {
        slice
            .handle(&actions.increment, move |count| count.saturating_add(step))
            .handle(&actions.decrement, move |count| count.saturating_sub(step))
            .handle(&actions.reset, move |_| initial)
            .handle_payload(&actions.add, |count, amount| count.saturating_add(*amount))
            .default(move |count, action: &CounterAction| {
                if warn_unhandled {
                    warn!(action_type = %action.action_type(), "unhandled action");
                }
                count
            });
    })
}

/// Result of replaying an action script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Counter value after the last action.
    pub state: i64,
    /// Number of actions dispatched.
    pub dispatched: usize,
    /// True if `freeze_after` locked the counter.
    pub frozen: bool,
}

/// Fold `actions` through the counter reducer.
///
/// With `freeze_after = n`, the state reached after the n-th action is locked
/// in and later actions no longer change the outcome.
pub fn replay(cfg: &ReplayConfig, actions: &[CounterAction]) -> Result<ReplayOutcome> {
    cfg.validate()?;
    let reducer = counter_reducer(cfg);
    let mut freeze = cfg.freeze_after.map(|after| Locker::new(after - 1));

    let mut state = *reducer.initial_state();
    for (index, action) in actions.iter().enumerate() {
        let next = reducer.reduce(Some(state), action);
        state = match freeze.as_mut() {
            Some(lock) => lock.lock(next),
            None => next,
        };
        debug!(index, action_type = %action.kind, state, "dispatched");
    }

    let frozen = freeze.as_ref().is_some_and(Locker::is_locked);
    let outcome = ReplayOutcome {
        state,
        dispatched: actions.len(),
        frozen,
    };
    info!(state = outcome.state, dispatched = outcome.dispatched, frozen, "replay finished");
    Ok(outcome)
}

/// Load an action script from disk and replay it.
pub fn replay_file(cfg: &ReplayConfig, path: &Path) -> Result<ReplayOutcome> {
    let actions: Vec<CounterAction> = load_actions(path).context("load actions for replay")?;
    replay(cfg, &actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{add, counter_script, named};

    #[test]
    fn replay_applies_counter_actions() {
        let outcome = replay(&ReplayConfig::default(), &counter_script()).expect("replay");
        assert_eq!(
            outcome,
            ReplayOutcome {
                state: 5,
                dispatched: 5,
                frozen: false,
            }
        );
    }

    #[test]
    fn replay_uses_configured_step_and_initial() {
        let cfg = ReplayConfig {
            initial: 100,
            step: 10,
            ..ReplayConfig::default()
        };
        let actions = vec![named("increment"), named("increment"), named("decrement")];
        assert_eq!(replay(&cfg, &actions).expect("replay").state, 110);
    }

    #[test]
    fn replay_reset_returns_to_initial() {
        let cfg = ReplayConfig {
            initial: 7,
            ..ReplayConfig::default()
        };
        let actions = vec![add(3), named("reset"), named("increment")];
        assert_eq!(replay(&cfg, &actions).expect("replay").state, 8);
    }

    #[test]
    fn replay_ignores_unknown_actions() {
        let actions = vec![named("increment"), named("launch"), named("increment")];
        assert_eq!(
            replay(&ReplayConfig::default(), &actions)
                .expect("replay")
                .state,
            2
        );
    }

    #[test]
    fn replay_freezes_after_configured_dispatches() {
        let cfg = ReplayConfig {
            freeze_after: Some(2),
            ..ReplayConfig::default()
        };
        let actions = vec![named("increment"), add(10), add(100), named("reset")];
        let outcome = replay(&cfg, &actions).expect("replay");
        assert_eq!(outcome.state, 11);
        assert!(outcome.frozen);
        assert_eq!(outcome.dispatched, 4);
    }

    #[test]
    fn replay_not_frozen_when_script_is_short() {
        let cfg = ReplayConfig {
            freeze_after: Some(10),
            ..ReplayConfig::default()
        };
        let outcome = replay(&cfg, &counter_script()).expect("replay");
        assert!(!outcome.frozen);
        assert_eq!(outcome.state, 5);
    }

    #[test]
    fn replay_saturates_at_counter_bounds() {
        let actions = vec![add(i64::MAX), named("increment"), add(1)];
        assert_eq!(
            replay(&ReplayConfig::default(), &actions)
                .expect("replay")
                .state,
            i64::MAX
        );

        let cfg = ReplayConfig {
            initial: i64::MIN,
            ..ReplayConfig::default()
        };
        let actions = vec![named("decrement"), add(-5)];
        assert_eq!(replay(&cfg, &actions).expect("replay").state, i64::MIN);
    }

    #[test]
    fn replay_rejects_invalid_config() {
        let cfg = ReplayConfig {
            step: 0,
            ..ReplayConfig::default()
        };
        assert!(replay(&cfg, &[]).is_err());
    }

    #[test]
    fn counter_creators_match_registered_types() {
        let creators = CounterActions::default();
        let reducer = counter_reducer(&ReplayConfig::default());
        assert!(reducer.handles(creators.increment.action_type()));
        assert!(reducer.handles(creators.add.action_type()));
        assert!(!reducer.handles(&"launch".to_string()));
    }

    #[test]
    fn replay_file_reads_script() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("actions.json");
        std::fs::write(&path, r#"[{"type": "add", "payload": 4}, {"type": "decrement"}]"#)
            .expect("write");
        let outcome = replay_file(&ReplayConfig::default(), &path).expect("replay");
        assert_eq!(outcome.state, 3);
    }
}
