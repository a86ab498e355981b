/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::fmt;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot, Notify};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, instrument, trace};
use uuid::Uuid;

use crate::actor::lifecycle::{self, ActorState, Wiring};
use crate::actor::{ActionQueue, Actor};
use crate::common::{
    ActorSystemError, CloseAcknowledger, FutureBox, MessageHandler, TroupeConfig,
    UnhandledMessagePolicy,
};
use crate::message::{ActionableMessage, Address, Envelope, SystemSignal};
use crate::traits::ActorHandleInterface;

/// A cheap, cloneable reference to a registered actor.
///
/// Handles are returned by [`ActorSystem::register`](crate::common::ActorSystem::register)
/// and [`ActorSystem::lookup`](crate::common::ActorSystem::lookup). All clones refer to the
/// same actor: its mailbox, handler map, action queue and lifecycle state.
///
/// Delivery goes through [`ActorHandleInterface`] (`submit`, `request_close`,
/// `is_accepting`); configuration (`register_handler`, `activate`) and inspection are
/// inherent methods.
#[derive(Clone)]
pub struct ActorHandle(Arc<ActorCell>);

struct ActorCell {
    id: String,
    actor_type: String,
    handlers: DashMap<String, MessageHandler>,
    outbox: mpsc::Sender<Envelope>,
    wiring: Mutex<Option<Wiring>>,
    action_queue: ActionQueue,
    state: AtomicU8,
    rejected: AtomicUsize,
    closed: CancellationToken,
    tracker: TaskTracker,
    acknowledger: CloseAcknowledger,
    unhandled_policy: UnhandledMessagePolicy,
    system_sender: Address,
}

impl ActorHandle {
    pub(crate) fn new(
        actor: &Actor,
        acknowledger: CloseAcknowledger,
        work_ready: Arc<Notify>,
        config: &TroupeConfig,
    ) -> Self {
        let actor_type = actor.actor_type().to_string();
        let capacity = actor
            .mailbox_capacity()
            .unwrap_or(config.limits.mailbox_capacity)
            .max(1);
        let (outbox, mailbox) = mpsc::channel(capacity);
        let (close_tx, close_rx) = oneshot::channel();
        let id = format!("{actor_type}-{}", Uuid::new_v4());
        trace!(id, capacity, "NEW ACTOR");

        Self(Arc::new(ActorCell {
            id,
            actor_type,
            handlers: DashMap::new(),
            outbox,
            wiring: Mutex::new(Some(Wiring {
                mailbox,
                close_tx,
                close_rx,
            })),
            action_queue: ActionQueue::new(work_ready),
            state: AtomicU8::new(ActorState::Registered as u8),
            rejected: AtomicUsize::new(0),
            closed: CancellationToken::new(),
            tracker: TaskTracker::new(),
            acknowledger,
            unhandled_policy: config.behavior.unhandled_message,
            system_sender: Address::new(config.defaults.system_sender.clone()),
        }))
    }

    /// Returns the internal id: the actor type followed by a unique suffix.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// Returns the actor type this actor is registered under.
    #[inline]
    #[must_use]
    pub fn actor_type(&self) -> &str {
        &self.0.actor_type
    }

    /// Returns the routing address of this actor.
    #[must_use]
    pub fn address(&self) -> Address {
        Address::new(self.0.actor_type.clone())
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ActorState {
        ActorState::from_u8(self.0.state.load(Ordering::Acquire))
    }

    /// Returns the number of messages waiting in the action queue.
    #[must_use]
    pub fn queued_actions(&self) -> usize {
        self.0.action_queue.len()
    }

    /// Returns how many envelopes were dropped for lacking a handler.
    ///
    /// Only grows under [`UnhandledMessagePolicy::Report`].
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.0.rejected.load(Ordering::Acquire)
    }

    /// Registers a handler for one more message type.
    ///
    /// Handlers stay registered for the actor's whole lifetime.
    ///
    /// # Errors
    ///
    /// * [`ActorSystemError::DuplicateHandler`] if the type already has a handler; the first
    ///   handler is kept.
    /// * [`ActorSystemError::InvalidMessageType`] for a blank or reserved message type.
    pub fn register_handler<F>(
        &self,
        message_type: impl Into<String>,
        handler: F,
    ) -> Result<(), ActorSystemError>
    where
        F: Fn(Envelope) -> FutureBox + Send + Sync + 'static,
    {
        self.insert_handler(message_type.into(), Arc::new(handler))
    }

    pub(crate) fn insert_handler(
        &self,
        message_type: String,
        handler: MessageHandler,
    ) -> Result<(), ActorSystemError> {
        check_message_type(&message_type)?;
        match self.0.handlers.entry(message_type) {
            Entry::Occupied(entry) => Err(ActorSystemError::DuplicateHandler {
                actor_type: self.0.actor_type.clone(),
                message_type: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!(actor = %self.0.id, message_type = %entry.key(), "registered handler");
                entry.insert(handler);
                Ok(())
            }
        }
    }

    /// Starts the actor's processing task.
    ///
    /// Until this is called envelopes pile up in the mailbox and a close request is
    /// never answered.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ActorSystemError::AlreadyActivated`] on every call after the first.
    #[instrument(skip(self), fields(actor = %self.0.id))]
    pub fn activate(&self) -> Result<(), ActorSystemError> {
        let Some(wiring) = self.0.wiring.lock().take() else {
            return Err(ActorSystemError::AlreadyActivated {
                actor_type: self.0.actor_type.clone(),
            });
        };
        self.advance(ActorState::Registered, ActorState::Active);
        self.0
            .tracker
            .spawn(lifecycle::process_mailbox(self.clone(), wiring));
        info!("Actor {} activated", self.0.id);
        Ok(())
    }

    /// Pops the next scheduled message without waiting.
    #[must_use]
    pub fn next_actionable(&self) -> Option<ActionableMessage> {
        self.0.action_queue.pop()
    }

    /// Resolves once the actor has completed its close handshake.
    pub async fn closed(&self) {
        self.0.closed.cancelled().await;
    }

    /// Moves the lifecycle forward from `from` to `to`; a no-op if another transition won.
    pub(crate) fn advance(&self, from: ActorState, to: ActorState) -> bool {
        self.0
            .state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Resolves the handler for an accepted envelope and schedules it.
    pub(crate) fn schedule(&self, envelope: Envelope) {
        if !self.is_accepting() {
            debug!(
                actor = %self.0.id,
                message_type = envelope.message_type(),
                "actor is draining, dropping envelope"
            );
            return;
        }
        let handler = self
            .0
            .handlers
            .get(envelope.message_type())
            .map(|entry| entry.value().clone());
        match handler {
            Some(handler) => {
                trace!(actor = %self.0.id, message_type = envelope.message_type(), "scheduling");
                self.0
                    .action_queue
                    .push(ActionableMessage::new(envelope, handler));
            }
            None => self.reject_unhandled(&envelope),
        }
    }

    fn reject_unhandled(&self, envelope: &Envelope) {
        let err = ActorSystemError::UnhandledMessageType {
            actor_type: self.0.actor_type.clone(),
            message_type: envelope.message_type().to_string(),
        };
        match self.0.unhandled_policy {
            UnhandledMessagePolicy::Terminate => {
                error!(actor = %self.0.id, %err, "terminating process");
                std::process::exit(1);
            }
            UnhandledMessagePolicy::Report => {
                error!(actor = %self.0.id, %err, "rejecting envelope");
                self.0.rejected.fetch_add(1, Ordering::AcqRel);
            }
        }
    }

    /// Stops accepting work and spawns the drain watcher that fires the close signal.
    pub(crate) fn begin_draining(&self, close_tx: Option<oneshot::Sender<()>>) {
        let Some(close_tx) = close_tx else {
            debug!(actor = %self.0.id, "close already requested, ignoring duplicate");
            return;
        };
        self.0
            .state
            .store(ActorState::Draining as u8, Ordering::Release);
        info!(
            "Stopping actor {} with id {} from accepting any more messages",
            self.0.actor_type, self.0.id
        );

        let actor = self.clone();
        self.0.tracker.spawn(async move {
            let pending = actor.queued_actions();
            if pending > 0 {
                debug!(actor = %actor.0.id, pending, "waiting for action queue to drain");
            }
            actor.0.action_queue.wait_until_empty().await;
            debug!(actor = %actor.0.id, "action queue drained");
            // The receiver only goes away with the processing task.
            let _ = close_tx.send(());
        });
    }

    /// Final teardown after the processing task has seen the close signal.
    pub(crate) fn finish_close(&self) {
        self.0.action_queue.clear();
        self.0
            .state
            .store(ActorState::Closed as u8, Ordering::Release);
        self.0.tracker.close();
        self.0
            .acknowledger
            .acknowledge_close(&self.0.actor_type, &self.0.id);
        self.0.closed.cancel();
        info!("Actor {} closed", self.0.id);
    }
}

#[async_trait]
impl ActorHandleInterface for ActorHandle {
    fn is_accepting(&self) -> bool {
        self.state().is_accepting()
    }

    async fn submit(&self, envelope: Envelope) -> Result<(), ActorSystemError> {
        self.0
            .outbox
            .send(envelope)
            .await
            .map_err(|_| ActorSystemError::MailboxClosed {
                actor_type: self.0.actor_type.clone(),
            })
    }

    async fn request_close(&self) -> Result<(), ActorSystemError> {
        trace!(actor = %self.0.id, "requesting close");
        let control = Envelope::control(
            SystemSignal::Shutdown,
            self.0.system_sender.clone(),
            self.address(),
        );
        self.submit(control).await
    }
}

impl fmt::Debug for ActorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorHandle")
            .field("id", &self.0.id)
            .field("state", &self.state())
            .field("queued_actions", &self.queued_actions())
            .finish_non_exhaustive()
    }
}

/// Rejects message types no handler may claim.
pub(crate) fn check_message_type(message_type: &str) -> Result<(), ActorSystemError> {
    let reason = if message_type.trim().is_empty() {
        "message type is blank"
    } else if SystemSignal::from_message_type(message_type).is_some() {
        "message type is reserved for system control"
    } else {
        return Ok(());
    };
    Err(ActorSystemError::InvalidMessageType {
        message_type: message_type.to_string(),
        reason: reason.to_string(),
    })
}
