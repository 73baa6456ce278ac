//! Search input debounce
//!
//! Only the last query pushed within the quiet window is delivered. A new
//! push cancels the pending one; nothing is queued.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default quiet window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct SearchDebouncer {
    window: Duration,
    tx: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Create a debouncer and the receiver that yields settled queries.
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                window,
                tx,
                pending: None,
            },
            rx,
        )
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a keystroke. Must be called inside a tokio runtime.
    pub fn push(&mut self, query: impl Into<String>) {
        self.cancel();
        let query = query.into();
        let tx = self.tx.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // receiver gone means the console shut down
            let _ = tx.send(query);
        }));
    }

    /// Drop the pending query, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
