//! Currying and partial application over variadic functions.
//!
//! A variadic function here is anything callable as `Fn(Vec<A>) -> R`. The
//! argument list is homogeneous; callers needing mixed argument kinds use an
//! enum for `A`.
//!
//! ```text
//! f(vec![a, b, c, d])  <=>  curry(f).apply([a]).apply([b]).apply([c, d]).call()
//! ```

use std::fmt;
use std::rc::Rc;

/// Shared handle to a variadic function.
pub type Variadic<A, R> = Rc<dyn Fn(Vec<A>) -> R>;

/// Outcome of feeding arguments to a progressively-applied function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<K, R> {
    /// More arguments are expected; the continuation carries what was collected.
    Pending(K),
    /// The underlying function ran and produced a result.
    Done(R),
}

impl<K, R> Step<K, R> {
    /// The result, if the underlying function ran.
    pub fn done(self) -> Option<R> {
        match self {
            Step::Done(result) => Some(result),
            Step::Pending(_) => None,
        }
    }

    /// The continuation, if more arguments are expected.
    pub fn pending(self) -> Option<K> {
        match self {
            Step::Pending(next) => Some(next),
            Step::Done(_) => None,
        }
    }
}

/// Bind a prefix of arguments to `f`.
///
/// The first call captures `init` and returns a function of the remaining
/// arguments; calling that function runs `f` with `init ++ rest` right away.
/// The bound function can be called any number of times.
pub fn partial<A, R, F>(f: F) -> impl Fn(Vec<A>) -> Variadic<A, R>
where
    A: Clone + 'static,
    R: 'static,
    F: Fn(Vec<A>) -> R + 'static,
{
    let f = Rc::new(f);
    move |init: Vec<A>| {
        let f = Rc::clone(&f);
        Rc::new(move |rest: Vec<A>| {
            let mut args = init.clone();
            args.extend(rest);
            f(args)
        }) as Variadic<A, R>
    }
}

/// Curried form of a variadic function.
///
/// Every [`apply`](Curried::apply) returns a fresh continuation owning its own
/// copy of the accumulated arguments, so one continuation can be branched
/// into several independent chains. Nothing runs until [`call`](Curried::call).
pub struct Curried<A, R> {
    f: Variadic<A, R>,
    args: Vec<A>,
}

/// Translate `f` into a chain of argument-accepting continuations terminated
/// by a zero-argument [`call`](Curried::call).
pub fn curry<A, R, F>(f: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    Curried {
        f: Rc::new(f),
        args: Vec::new(),
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Append `args` to the chain, returning a new continuation.
    pub fn apply<I>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.args.clone();
        accumulated.extend(args);
        Curried {
            f: Rc::clone(&self.f),
            args: accumulated,
        }
    }

    /// Terminate the chain: run `f` with everything accumulated so far.
    pub fn call(&self) -> R {
        (self.f)(self.args.clone())
    }

    /// Feed `args` the way an untyped curried function would take them:
    /// an empty list terminates the chain, anything else extends it.
    pub fn step(&self, args: Vec<A>) -> Step<Self, R> {
        if args.is_empty() {
            Step::Done(self.call())
        } else {
            Step::Pending(self.apply(args))
        }
    }

    /// Arguments accumulated so far.
    pub fn args(&self) -> &[A] {
        &self.args
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Curried {
            f: Rc::clone(&self.f),
            args: self.args.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried").field("args", &self.args).finish()
    }
}
