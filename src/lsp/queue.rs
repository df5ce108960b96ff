//! Single-flight lint request queue
//!
//! Every submitted item is handled by one worker task, strictly in submission
//! order and one at a time. Nothing is deduplicated or dropped. The queue holds
//! a single pending item, so [`RequestQueue::submit`] waits while the worker
//! is busy and the slot is taken.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::types::{Error, Result};

/// Number of items that may wait while the worker is busy
const QUEUE_CAPACITY: usize = 1;

/// Bounded work queue with exactly one consumer
pub struct RequestQueue<T> {
    sender: Mutex<Option<mpsc::Sender<T>>>,
    worker: JoinHandle<()>,
}

impl<T: Send + 'static> RequestQueue<T> {
    /// Spawn the worker; `handler` runs to completion for each item before
    /// the next is taken. Must be called within a tokio runtime.
    pub fn start<F, Fut>(mut handler: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (sender, mut receiver) = mpsc::channel::<T>(QUEUE_CAPACITY);

        let worker = tokio::spawn(async move {
            while let Some(item) = receiver.recv().await {
                handler(item).await;
            }
            log::debug!("lint queue closed, worker stopping");
        });

        Self {
            sender: Mutex::new(Some(sender)),
            worker,
        }
    }

    /// Hand `item` to the worker, waiting for a free slot
    pub async fn submit(&self, item: T) -> Result<()> {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match sender {
            Some(sender) => sender.send(item).await.map_err(|_| Error::QueueClosed),
            None => Err(Error::QueueClosed),
        }
    }

    /// Stop accepting items. The worker exits once nothing is left to take.
    pub fn close(&self) {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Whether the worker task has exited
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}
