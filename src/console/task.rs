//! Background request plumbing.
//!
//! The UI thread owns all state. Requests run on the tokio runtime and hand
//! their results back over a channel that the UI drains once per frame.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::Handle;

/// Spawns futures and collects their outputs for the next frame
pub struct TaskQueue<T> {
    runtime: Handle,
    tx: Sender<T>,
    rx: Receiver<T>,
    in_flight: usize,
}

impl<T: Send + 'static> TaskQueue<T> {
    pub fn new(runtime: Handle) -> Self {
        let (tx, rx) = channel();
        Self {
            runtime,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            // Receiver gone means the UI shut down.
            let _ = tx.send(future.await);
        });
    }

    /// Results that arrived since the last call, without blocking
    pub fn drain(&mut self) -> Vec<T> {
        let ready: Vec<T> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(ready.len());
        ready
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
