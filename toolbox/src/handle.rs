//! Expression-level error handling.
//!
//! These wrap a fallible computation so it can sit inside an expression (a
//! `choose` table entry, a reducer body) and recover in place.

use std::future::Future;

/// Run `f`; on `Err(e)` return `Ok(handler(e))` when a handler is given,
/// otherwise hand back the raw error.
pub fn handle_exception<T, E, F, H>(f: F, handler: Option<H>) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    H: FnOnce(E) -> T,
{
    match f() {
        Ok(value) => Ok(value),
        Err(err) => match handler {
            Some(handler) => Ok(handler(err)),
            None => Err(err),
        },
    }
}

/// Async [`handle_exception`]: awaits `f()`, and on failure awaits the
/// handler before returning.
pub async fn handle_rejection<T, E, F, Fut, H, HFut>(f: F, handler: Option<H>) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E) -> HFut,
    HFut: Future<Output = T>,
{
    match f().await {
        Ok(value) => Ok(value),
        Err(err) => match handler {
            Some(handler) => Ok(handler(err).await),
            None => Err(err),
        },
    }
}
