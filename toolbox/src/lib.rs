//! Functional toolbox: function transformers and a dispatch-driven reducer
//! builder.
//!
//! - **[`core`]**: Pure combinators (`choose`, `curry`, `partial`, `rearg`,
//!   `locker`, `y`). No I/O, no logging.
//! - **[`redux`]**: Typed actions, action creators, and reducers built on
//!   [`core::choose`].
//! - **[`io`]**: Config and action-file loading for the `toolbox` binary.
//!
//! [`replay`] coordinates a demonstration counter slice with the I/O layer to
//! implement the CLI.

pub mod core;
pub mod handle;
pub mod io;
pub mod logging;
pub mod redux;
pub mod replay;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod time_unit;
