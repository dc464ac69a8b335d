//! Value locking: pass values through for a while, then freeze one.

/// Lock that acts as identity for `n` calls and memoizes the argument of
/// call `n + 1`; every later call ignores its argument.
///
/// ```text
/// let mut lock = Locker::new(2);
/// lock.lock("Repeat after me!")  -> "Repeat after me!"
/// lock.lock("42")                -> "42"
/// lock.lock("All right...")      -> "All right..."   (locked now)
/// lock.lock("anything")          -> "All right..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locker<T> {
    threshold: usize,
    count: usize,
    locked: Option<T>,
}

impl<T: Clone> Locker<T> {
    /// `threshold` is the number of calls that pass values through unchanged.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            count: 0,
            locked: None,
        }
    }

    /// Return `value` while under the threshold, otherwise the frozen value.
    pub fn lock(&mut self, value: T) -> T {
        if let Some(locked) = &self.locked {
            return locked.clone();
        }
        if self.count < self.threshold {
            self.count += 1;
            return value;
        }
        self.locked = Some(value.clone());
        value
    }

    /// True once a value has been frozen.
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// The frozen value, if any.
    pub fn locked(&self) -> Option<&T> {
        self.locked.as_ref()
    }
}

impl<T: Clone> Default for Locker<T> {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Closure form of [`Locker`]. Each call creates isolated lock state.
pub fn locker<T: Clone>(threshold: usize) -> impl FnMut(T) -> T {
    let mut state = Locker::new(threshold);
    move |value| state.lock(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locker_freezes_second_value() {
        let mut lock = Locker::default();
        assert_eq!(lock.lock("I like you!"), "I like you!");
        assert!(!lock.is_locked());
        assert_eq!(lock.lock("I hate you."), "I hate you.");
        assert!(lock.is_locked());
        assert_eq!(lock.lock("I like you!"), "I hate you.");
    }

    #[test]
    fn locker_passes_through_threshold_calls() {
        let mut lock = Locker::new(2);
        assert_eq!(lock.lock(1), 1);
        assert_eq!(lock.lock(2), 2);
        assert!(!lock.is_locked());
        assert_eq!(lock.lock(3), 3);
        assert_eq!(lock.locked(), Some(&3));
        assert_eq!(lock.lock(4), 3);
        assert_eq!(lock.lock(5), 3);
    }

    #[test]
    fn zero_threshold_locks_first_value() {
        let mut lock = Locker::new(0);
        assert_eq!(lock.lock('a'), 'a');
        assert_eq!(lock.lock('b'), 'a');
    }

    #[test]
    fn locker_closures_do_not_share_state() {
        let mut first = locker::<u32>(1);
        let mut second = locker::<u32>(1);
        assert_eq!(first(1), 1);
        assert_eq!(first(2), 2);
        assert_eq!(second(10), 10);
        assert_eq!(first(3), 2);
        assert_eq!(second(20), 20);
        assert_eq!(second(30), 20);
    }
}
