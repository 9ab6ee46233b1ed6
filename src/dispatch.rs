// SPDX-License-Identifier: MPL-2.0
//! UI-thread dispatch.
//!
//! Producer threads hand work to the single UI thread through an injected
//! [`UiDispatcher`] capability instead of a process-wide free function. The
//! shipped implementation is a `crossbeam-channel` queue: callbacks posted
//! from any thread run FIFO relative to each other when the host drains the
//! matching [`UiQueue`] from its event loop. No ordering is promised against
//! unrelated UI events beyond that queue's natural order.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

/// A callback marshalled to the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Capability to queue a callback onto the UI thread's event loop.
pub trait UiDispatcher: Send + Sync {
    fn post(&self, task: UiTask);
}

/// Sending half of the dispatcher queue. Cheap to clone into producer
/// threads.
#[derive(Clone)]
pub struct ChannelDispatcher {
    sender: Sender<UiTask>,
}

impl ChannelDispatcher {
    /// Creates a dispatcher and the queue the UI thread drains.
    #[must_use]
    pub fn new() -> (Self, UiQueue) {
        let (sender, receiver) = unbounded();
        (Self { sender }, UiQueue { receiver })
    }
}

impl UiDispatcher for ChannelDispatcher {
    fn post(&self, task: UiTask) {
        // The UI loop has shut down when the queue is gone; dropping the
        // task is the only sensible thing left.
        if self.sender.send(task).is_err() {
            tracing::warn!("ui queue disconnected, dropping task");
        }
    }
}

/// Receiving half of the dispatcher queue, owned by the UI thread.
pub struct UiQueue {
    receiver: Receiver<UiTask>,
}

impl UiQueue {
    /// Runs every callback queued so far, in FIFO order. Returns how many
    /// ran. Never blocks.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return ran,
            }
        }
    }
}

/// Dispatcher that runs tasks inline on the calling thread.
///
/// For tests and strictly single-threaded hosts, where the caller *is* the
/// UI thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateDispatcher;

impl UiDispatcher for ImmediateDispatcher {
    fn post(&self, task: UiTask) {
        task();
    }
}
