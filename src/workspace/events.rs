//! Workspace signals and their fan-out bus.
//!
//! The original suite coupled its widgets through DOM event bubbling on a
//! shared container. Here the coupling is explicit: components subscribe
//! to the bus and receive every published [`Signal`] on their own channel.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::generator::GeneratedSet;

/// Cross-component notifications the core emits and accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A generation call produced a result; the workspace consumes this
    /// by replacing its document.
    GenerationProduced(GeneratedSet),
    /// The document was mutated; renderers and export/share components
    /// should refresh their snapshot.
    DocumentChanged,
    /// A palette was successfully appended to persistent storage.
    PaletteSaved,
}

/// Fan-out bus delivering every signal to every live subscriber.
#[derive(Debug, Default)]
pub struct SignalBus {
    subscribers: Vec<Sender<Signal>>,
}

impl SignalBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<Signal> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Delivers a signal to all subscribers, pruning any that have
    /// disconnected.
    pub fn publish(&mut self, signal: &Signal) {
        self.subscribers
            .retain(|tx| tx.send(signal.clone()).is_ok());
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
