//! Ordered action store around the reducer
//!
//! The store is a single logical sequence: actions are reduced strictly in
//! arrival order, each observing the state produced by the one before.
//! Effects run asynchronously off that sequence and feed their follow-up
//! actions back into the same queue; nothing blocks the sequence while a
//! save is in flight.

use crate::action::{Action, Effect};
use crate::reducer::reduce;
use crate::service::CategoriesService;
use crate::state::UneatenState;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

enum Envelope {
    Action(Action),
    Subscribe(mpsc::UnboundedSender<UneatenState>),
    Snapshot(oneshot::Sender<UneatenState>),
}

/// Handle to a running store task.
///
/// Cheap to clone; all clones feed the same ordered queue.
#[derive(Clone)]
pub struct Store {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl Store {
    /// Spawn the store task over an initial state and a persistence
    /// service. The task ends once every handle is dropped; effects only
    /// hold a weak reference to the queue, so they never keep it alive.
    pub fn spawn(initial: UneatenState, service: Arc<dyn CategoriesService>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(initial, service, tx.downgrade(), rx));
        Self { tx }
    }

    /// Queue an action. Delivery is ordered with respect to every other
    /// action sent on any clone of this handle.
    pub fn send(&self, action: Action) {
        if self.tx.send(Envelope::Action(action)).is_err() {
            warn!("store task is gone, action dropped");
        }
    }

    /// Register for committed snapshots: one delivery per processed
    /// action, carrying the state it produced.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<UneatenState> {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = self.tx.send(Envelope::Subscribe(tx));
        rx
    }

    /// Current state, ordered after every action already queued.
    pub async fn snapshot(&self) -> Option<UneatenState> {
        let (tx, rx) = oneshot::channel();
        self.tx.send(Envelope::Snapshot(tx)).ok()?;
        rx.await.ok()
    }
}

async fn run(
    initial: UneatenState,
    service: Arc<dyn CategoriesService>,
    feedback: mpsc::WeakUnboundedSender<Envelope>,
    mut rx: mpsc::UnboundedReceiver<Envelope>,
) {
    let mut state = initial;
    let mut subscribers: Vec<mpsc::UnboundedSender<UneatenState>> = Vec::new();

    while let Some(envelope) = rx.recv().await {
        match envelope {
            Envelope::Action(action) => {
                debug!(?action, "reducing");
                let (next, effects) = reduce(state, action);
                state = next;
                subscribers.retain(|sub| sub.send(state.clone()).is_ok());
                for effect in effects {
                    run_effect(effect, service.clone(), feedback.clone());
                }
            }
            Envelope::Subscribe(sub) => subscribers.push(sub),
            Envelope::Snapshot(reply) => {
                let _ = reply.send(state.clone());
            }
        }
    }
}

fn run_effect(
    effect: Effect,
    service: Arc<dyn CategoriesService>,
    feedback: mpsc::WeakUnboundedSender<Envelope>,
) {
    match effect {
        Effect::Save { keys } => {
            tokio::spawn(async move {
                let followup = match service.save(keys).await {
                    Ok(()) => Action::AcknowledgeValidation,
                    Err(e) => Action::ValidationFailed {
                        reason: e.to_string(),
                    },
                };
                if let Some(queue) = feedback.upgrade() {
                    let _ = queue.send(Envelope::Action(followup));
                }
            });
        }
    }
}
