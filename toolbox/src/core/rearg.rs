//! Argument rearrangement.
//!
//! `rearg(f)` collects target indices progressively (curried over `usize`),
//! and the rearranged function then collects its arguments progressively
//! until it has at least one per index.
//!
//! ```text
//! pad_left(["Foo", 10, "."])            -> ".......Foo"
//! let re_pad = rearg(pad_left).apply([1, 2, 0]).call();
//! re_pad.apply([10, ".", "Bar"])        -> Done(".......Bar")
//! ```

use std::fmt;
use std::rc::Rc;

use crate::core::curry::{Curried, Step, curry};

/// Function consuming a rearranged argument list. Positions no argument was
/// routed to arrive as `None`.
pub type Sparse<A, R> = Rc<dyn Fn(Vec<Option<A>>) -> R>;

/// Curried index collector returned by [`rearg`].
pub type ReargIndices<A, R> = Curried<usize, Rearranged<A, R>>;

/// Rearrange the arguments of `f`.
///
/// The i-th argument supplied to the rearranged function becomes argument
/// `indices[i]` of `f`. Arguments beyond `indices.len()` are appended after
/// the rearranged prefix.
pub fn rearg<A, R, F>(f: F) -> ReargIndices<A, R>
where
    A: 'static,
    R: 'static,
    F: Fn(Vec<Option<A>>) -> R + 'static,
{
    let f: Sparse<A, R> = Rc::new(f);
    curry(move |indices: Vec<usize>| Rearranged {
        f: Rc::clone(&f),
        indices: indices.into(),
        args: Vec::new(),
    })
}

/// A function with rearranged arguments, curried down to `indices.len()`
/// required arguments.
pub struct Rearranged<A, R> {
    f: Sparse<A, R>,
    indices: Rc<[usize]>,
    args: Vec<A>,
}

impl<A: Clone, R> Rearranged<A, R> {
    /// Number of arguments still required before `f` runs.
    pub fn remaining(&self) -> usize {
        self.indices.len().saturating_sub(self.args.len())
    }

    /// Target positions, in argument order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Supply more arguments. Runs `f` once every index has an argument.
    pub fn apply<I>(&self, args: I) -> Step<Self, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.args.clone();
        accumulated.extend(args);
        if accumulated.len() < self.indices.len() {
            return Step::Pending(Rearranged {
                f: Rc::clone(&self.f),
                indices: Rc::clone(&self.indices),
                args: accumulated,
            });
        }
        Step::Done((self.f)(arrange(&self.indices, accumulated)))
    }
}

impl<A: Clone, R> Clone for Rearranged<A, R> {
    fn clone(&self) -> Self {
        Rearranged {
            f: Rc::clone(&self.f),
            indices: Rc::clone(&self.indices),
            args: self.args.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Rearranged<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rearranged")
            .field("indices", &self.indices)
            .field("args", &self.args)
            .finish()
    }
}

/// Route `args[i]` to position `indices[i]`, then append the overflow.
///
/// Later duplicates of an index overwrite earlier ones.
fn arrange<A>(indices: &[usize], args: Vec<A>) -> Vec<Option<A>> {
    let width = indices.iter().max().map_or(0, |max| max + 1);
    let mut routed: Vec<Option<A>> = std::iter::repeat_with(|| None).take(width).collect();
    let mut args = args.into_iter();
    for &index in indices {
        routed[index] = args.next();
    }
    routed.extend(args.map(Some));
    routed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present<A>(args: Vec<Option<A>>) -> Vec<A> {
        args.into_iter().flatten().collect()
    }

    fn pad_left(args: Vec<Option<String>>) -> String {
        let text = args[0].clone().unwrap_or_default();
        let width: usize = args[1].as_deref().unwrap_or("0").parse().unwrap_or(0);
        let fill = args[2].clone().unwrap_or_else(|| " ".to_string());
        let padding = width.saturating_sub(text.len());
        format!("{}{}", fill.repeat(padding), text)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn rearg_routes_argument_i_to_index_i() {
        let re_pad = rearg(pad_left).apply([1, 2, 0]).call();
        let padded = re_pad.apply(strings(&["10", ".", "Bar"]));
        assert_eq!(padded.done(), Some(".......Bar".to_string()));
    }

    #[test]
    fn rearg_reverses_arguments() {
        let rev = rearg(present::<&str>).apply([4, 3, 2, 1, 0]).call();
        let out = rev.apply(["a", "b", "c", "d", "e"]).done().expect("done");
        assert_eq!(out, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn rearg_collects_indices_progressively() {
        let collector = rearg(present::<i32>).apply([2]).apply([0, 1]);
        let rearranged = collector.call();
        assert_eq!(rearranged.indices(), &[2, 0, 1]);
        let out = rearranged.apply([10, 20, 30]).done().expect("done");
        assert_eq!(out, vec![20, 30, 10]);
    }

    #[test]
    fn rearg_collects_arguments_progressively() {
        let rev = rearg(present::<&str>).apply([4, 3, 2, 1, 0]).call();
        let step = rev.apply(["f"]).pending().expect("pending");
        assert_eq!(step.remaining(), 4);
        let step = step.apply(["g", "h"]).pending().expect("pending");
        assert_eq!(step.remaining(), 2);
        let step = step.apply(["i"]).pending().expect("pending");
        let out = step.apply(["j"]).done().expect("done");
        assert_eq!(out, vec!["j", "i", "h", "g", "f"]);
    }

    #[test]
    fn rearg_partial_argument_chains_branch_independently() {
        let swap = rearg(present::<i32>).apply([1, 0]).call();
        let first = swap.apply([1]).pending().expect("pending");
        assert_eq!(first.apply([2]).done(), Some(vec![2, 1]));
        assert_eq!(first.apply([3]).done(), Some(vec![3, 1]));
    }

    #[test]
    fn rearg_passes_overflow_arguments_after_prefix() {
        let swap = rearg(|args: Vec<Option<i32>>| args).apply([1, 0]).call();
        let out = swap.apply([1, 2, 3, 4]).done().expect("done");
        assert_eq!(out, vec![Some(2), Some(1), Some(3), Some(4)]);
    }

    #[test]
    fn rearg_fills_untargeted_positions_with_none() {
        let sparse = rearg(|args: Vec<Option<char>>| args).apply([3, 0]).call();
        let out = sparse.apply(['a', 'b']).done().expect("done");
        assert_eq!(out, vec![Some('b'), None, None, Some('a')]);
    }

    #[test]
    fn rearg_duplicate_index_keeps_later_argument() {
        let dup = rearg(|args: Vec<Option<i32>>| args).apply([0, 0]).call();
        let out = dup.apply([1, 2]).done().expect("done");
        assert_eq!(out, vec![Some(2)]);
    }

    #[test]
    fn rearg_without_indices_passes_arguments_through() {
        let plain = rearg(|args: Vec<Option<i32>>| args).call();
        assert_eq!(plain.remaining(), 0);
        assert_eq!(plain.apply([5, 6]).done(), Some(vec![Some(5), Some(6)]));
        assert_eq!(plain.apply(Vec::new()).done(), Some(Vec::new()));
    }
}
