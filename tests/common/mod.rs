//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use widgetcore::loader::{FetchError, ItemFetcher};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Fetcher whose calls block until the test releases them.
///
/// Each queued gate pairs with one `fetch_items` call in FIFO order; the
/// test holds the sender side and decides when (and with what) the fetch
/// completes. Clones share the same gates and call log, so a test can keep
/// a handle after moving the fetcher into a loader.
#[derive(Clone, Default)]
pub struct GatedFetcher {
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<Result<Vec<u32>, FetchError>>>>>,
    calls: Arc<Mutex<Vec<u32>>>,
}

impl GatedFetcher {
    /// Queue a gate for the next fetch; returns the release handle.
    pub fn add_gate(&self) -> oneshot::Sender<Result<Vec<u32>, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }

    /// Params of all fetches issued so far, in call order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().clone()
    }

    /// Wait until at least `n` fetches have been issued.
    pub async fn wait_for_calls(&self, n: usize) {
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while self.calls.lock().len() < n {
            assert!(
                std::time::Instant::now() < deadline,
                "timed out waiting for {} fetch calls",
                n
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

impl ItemFetcher for GatedFetcher {
    type Param = u32;
    type Item = u32;

    fn fetch_items(
        &self,
        param: &u32,
    ) -> impl std::future::Future<Output = Result<Vec<u32>, FetchError>> + Send {
        self.calls.lock().push(*param);
        let gate = self
            .gates
            .lock()
            .pop_front()
            .expect("no gate queued for fetch call");
        async move { gate.await.expect("gate sender dropped") }
    }
}
