//! Y combinator: anonymous recursion through self-application.

use std::rc::Rc;

/// Shared handle to a unary function. Use a tuple argument for several values.
pub type Func<A, R> = Rc<dyn Fn(A) -> R>;

/// A function that accepts itself. `Mu::unroll` is the `h(h)` of the
/// self-application.
struct Mu<A, R>(Rc<dyn Fn(&Mu<A, R>) -> Func<A, R>>);

impl<A, R> Clone for Mu<A, R> {
    fn clone(&self) -> Self {
        Mu(Rc::clone(&self.0))
    }
}

impl<A, R> Mu<A, R> {
    fn unroll(&self) -> Func<A, R> {
        (self.0)(self)
    }
}

/// Return the fixed point of `f`: a function `h` with `h == f(h)`.
///
/// `f` receives the recursive handle and returns the function body. The
/// handle is `g(g)` behind a closure, so unfolding happens one level per call
/// instead of eagerly.
///
/// ```text
/// let fact = y(|this: Func<u64, u64>| -> Func<u64, u64> {
///     Rc::new(move |n| if n <= 1 { 1 } else { n * this(n - 1) })
/// });
/// fact(5) -> 120
/// ```
pub fn y<A, R, F>(f: F) -> Func<A, R>
where
    A: 'static,
    R: 'static,
    F: Fn(Func<A, R>) -> Func<A, R> + 'static,
{
    let f = Rc::new(f);
    let g: Mu<A, R> = Mu(Rc::new(move |h: &Mu<A, R>| {
        let f = Rc::clone(&f);
        let h = h.clone();
        Rc::new(move |arg: A| f(h.unroll())(arg)) as Func<A, R>
    }));
    g.unroll()
}
