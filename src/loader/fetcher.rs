//! Data-access collaborator consumed by the loader.

use std::future::Future;

use thiserror::Error;

/// Errors a fetch can surface.
///
/// The loader never propagates these to its host; it folds the `Display`
/// form into [`LoadPhase::Error`](super::LoadPhase::Error).
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, timeout, closed socket).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Asynchronous source of items keyed by an opaque parameter.
///
/// Implementations decide what the parameter means (the shipped HTTP
/// fetcher treats it as a result limit). The loader only requires that a
/// fetch eventually yields items or a [`FetchError`]; it imposes no
/// timeout or retry of its own.
pub trait ItemFetcher: Send + Sync {
    /// Request key; changing it invalidates in-flight requests.
    type Param: Clone + Send + Sync;

    /// Element of the fetched collection.
    type Item: Clone + Send + Sync;

    /// Fetch the items for `param`.
    fn fetch_items(
        &self,
        param: &Self::Param,
    ) -> impl Future<Output = Result<Vec<Self::Item>, FetchError>> + Send;
}
