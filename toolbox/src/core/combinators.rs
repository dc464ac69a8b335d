//! Small value-level combinators.

/// Return the argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Put `value` under a function abstraction.
pub fn lazyish<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Evaluate `f` in place. Gives a block its own scope of bindings.
#[inline]
pub fn local<T, F: FnOnce() -> T>(f: F) -> T {
    f()
}
