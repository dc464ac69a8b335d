//! Dispatch-by-key: a functional replacement for `match` over runtime keys.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Invoke the action registered under `key`, or `default_action` if none is.
///
/// `args` is handed to whichever function is chosen. Use a tuple to pass
/// several values and `()` to pass none. Whatever the chosen function returns
/// (including an `Err` or a panic) reaches the caller untouched.
pub fn choose<K, Q, F, D, A, R, H>(
    key: &Q,
    actions: &HashMap<K, F, H>,
    default_action: D,
    args: A,
) -> R
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    F: Fn(A) -> R,
    D: FnOnce(A) -> R,
    H: BuildHasher,
{
    match actions.get(key) {
        Some(action) => action(args),
        None => default_action(args),
    }
}

/// [`choose`] with the "default returns nothing" fallback.
pub fn choose_opt<K, Q, F, A, R, H>(key: &Q, actions: &HashMap<K, F, H>, args: A) -> Option<R>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    F: Fn(A) -> R,
    H: BuildHasher,
{
    actions.get(key).map(|action| action(args))
}
