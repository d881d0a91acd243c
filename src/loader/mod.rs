//! Asynchronous list-loading state machine.
//!
//! Drives the fetch lifecycle for a parameterised collection:
//!
//! ```text
//! Idle ──load()──▶ Loading ──(ok)──▶ Success
//!                  Loading ──(err)─▶ Error
//! Success ──refresh()──▶ Loading
//! Error ──retry()──▶ Loading
//! (param change) ──▶ Loading   (new generation)
//! ```
//!
//! Each issued request carries a generation token; only the response for
//! the highest generation may update state, so a slow superseded request
//! can never clobber a newer one, whatever order the network completes in.
//! Failures are absorbed into the `Error` phase — hosts read state, they
//! never catch.

mod fetcher;
mod list_loader;
mod phase;

pub use fetcher::{FetchError, ItemFetcher};
pub use list_loader::ListLoader;
pub use phase::LoadPhase;
