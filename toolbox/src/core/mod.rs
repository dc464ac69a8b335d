//! Pure function combinators.
//!
//! Nothing in here performs I/O or logs. Closures are shared through `Rc`, so
//! the values built here stay on the thread that created them.

pub mod choice;
pub mod combinators;
pub mod curry;
pub mod fixpoint;
pub mod locker;
pub mod rearg;

pub use choice::{choose, choose_opt};
pub use combinators::{identity, lazyish, local};
pub use curry::{Curried, Step, Variadic, curry, partial};
pub use fixpoint::{Func, y};
pub use locker::{Locker, locker};
pub use rearg::{ReargIndices, Rearranged, Sparse, rearg};
