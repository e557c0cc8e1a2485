//! Selection notifications.
//!
//! Callbacks never run on the thread handling input or on a runtime worker.
//! Under tokio they run on the blocking pool, otherwise on plain threads. In
//! [`DispatchMode::Detached`] every notification is its own job, so two quick
//! selection changes may reach the callback in either order and a
//! notification may land after the next frame is painted. Use
//! [`DispatchMode::Ordered`] when the observer needs them in raise order.
//! Dispatched notifications cannot be withdrawn.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// What caused a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKind {
    /// An item was picked with the mouse.
    Changed,
    /// The user pressed Enter on the current selection.
    Confirmed,
}

/// Payload handed to the selection callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEvent {
    pub index: usize,
    pub text: String,
    pub kind: SelectKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// One task per notification, no ordering between them.
    #[default]
    Detached,
    /// A single consumer drains a queue, preserving raise order.
    Ordered,
}

pub(crate) type SelectCallback = Arc<dyn Fn(SelectEvent) + Send + Sync>;

/// Owns the callback and gets events to it.
pub(crate) struct Notifier {
    mode: DispatchMode,
    callback: Option<SelectCallback>,
    /// Sender side of the `Ordered` queue, created on first use.
    queue: Option<mpsc::UnboundedSender<SelectEvent>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("mode", &self.mode)
            .field("callback", &self.callback.is_some())
            .field("queue", &self.queue.is_some())
            .finish()
    }
}

impl Notifier {
    pub fn new(mode: DispatchMode) -> Self {
        Self {
            mode,
            callback: None,
            queue: None,
        }
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Replace the callback. The previous `Ordered` consumer stops once its
    /// queue is drained.
    pub fn set_callback(&mut self, callback: Option<SelectCallback>) {
        self.callback = callback;
        self.queue = None;
    }

    pub fn set_mode(&mut self, mode: DispatchMode) {
        if self.mode != mode {
            self.mode = mode;
            self.queue = None;
        }
    }

    /// Hand `event` to the callback without waiting for it to run.
    pub fn dispatch(&mut self, event: SelectEvent) {
        let Some(callback) = self.callback.clone() else {
            return;
        };

        match self.mode {
            DispatchMode::Detached => {
                log::trace!("dispatching {:?} on a detached task", event.kind);
                spawn_detached(move || callback(event));
            }
            DispatchMode::Ordered => {
                let queue = self
                    .queue
                    .get_or_insert_with(|| start_consumer(callback));
                if let Err(mpsc::error::SendError(event)) = queue.send(event) {
                    log::warn!(
                        "selection consumer is gone, dropping notification for item {}",
                        event.index
                    );
                    self.queue = None;
                }
            }
        }
    }
}

/// Run `job` on the blocking pool of the ambient tokio runtime, or on a fresh
/// thread when the host has none.
fn spawn_detached<F>(job: F)
where
    F: FnOnce() + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn_blocking(job);
        }
        Err(_) => {
            std::thread::spawn(job);
        }
    }
}

/// Start the single consumer of the `Ordered` queue. It exits once the
/// sender is dropped.
fn start_consumer(callback: SelectCallback) -> mpsc::UnboundedSender<SelectEvent> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SelectEvent>();

    spawn_detached(move || {
        while let Some(event) = rx.blocking_recv() {
            callback(event);
        }
        log::trace!("selection consumer finished");
    });

    tx
}
