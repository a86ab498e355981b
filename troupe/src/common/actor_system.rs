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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use lazy_static::lazy_static;
use tokio::sync::{mpsc, oneshot, Notify};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::actor::{check_message_type, Actor, ActorHandle};
use crate::common::close_acknowledger::{ActorRegistry, CloseAcknowledger};
use crate::common::{
    dispatcher, executor, ActorSystemError, FutureBox, TroupeConfig, CONFIG,
};
use crate::message::Envelope;
use crate::traits::ActorHandleInterface;

lazy_static! {
    static ref DEFAULT_SYSTEM: ActorSystem =
        ActorSystem::new(CONFIG.defaults.system_name.clone());
}

/// The registry of actors plus the dispatcher and executor loops that serve them.
///
/// `ActorSystem` is a cheap handle; clones share the same registry and loops.
///
/// The usual sequence is:
///
/// 1. [`register`](Self::register) each actor with its first handler, add more with
///    [`ActorHandle::register_handler`] and call [`ActorHandle::activate`].
/// 2. [`start`](Self::start) the loops with the receiving end of an inbound queue
///    (see [`inbound_channel`](Self::inbound_channel)).
/// 3. Produce [`Envelope`]s into the inbound queue.
/// 4. [`close`](Self::close) (or [`shutdown`](Self::shutdown)) once to drain every actor
///    and stop the loops.
#[derive(Clone, Debug)]
pub struct ActorSystem(pub(crate) Arc<SystemInner>);

#[derive(Debug)]
pub(crate) struct SystemInner {
    name: String,
    actors: Arc<ActorRegistry>,
    config: TroupeConfig,
    work_ready: Arc<Notify>,
    stop_loops: CancellationToken,
    loops: TaskTracker,
    started: AtomicBool,
    closing: AtomicBool,
}

impl ActorSystem {
    /// Creates a system using the global [`CONFIG`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, CONFIG.clone())
    }

    /// Creates a system with an explicit configuration.
    pub fn with_config(name: impl Into<String>, config: TroupeConfig) -> Self {
        let name = name.into();
        trace!(system = %name, ?config, "creating actor system");
        Self(Arc::new(SystemInner {
            name,
            actors: Arc::new(ActorRegistry::new()),
            config,
            work_ready: Arc::new(Notify::new()),
            stop_loops: CancellationToken::new(),
            loops: TaskTracker::new(),
            started: AtomicBool::new(false),
            closing: AtomicBool::new(false),
        }))
    }

    /// Returns the process-wide default system, named from configuration.
    #[must_use]
    pub fn default_system() -> Self {
        DEFAULT_SYSTEM.clone()
    }

    /// Returns the system name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the configuration this system was built with.
    #[must_use]
    pub fn config(&self) -> &TroupeConfig {
        &self.0.config
    }

    /// Returns the number of currently registered actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.0.actors.len()
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.0.closing.load(Ordering::SeqCst)
    }

    /// Builds a bounded inbound queue sized by `limits.inbound_capacity`.
    #[must_use]
    pub fn inbound_channel(&self) -> (mpsc::Sender<Envelope>, mpsc::Receiver<Envelope>) {
        mpsc::channel(self.0.config.limits.inbound_capacity.max(1))
    }

    /// Registers an actor together with the handler for its first message type.
    ///
    /// The returned handle is accepting but not yet processing; call
    /// [`ActorHandle::activate`] to start it.
    ///
    /// # Errors
    ///
    /// * [`ActorSystemError::InvalidActor`] if the actor type is blank.
    /// * [`ActorSystemError::InvalidMessageType`] if `message_type` is blank or reserved.
    /// * [`ActorSystemError::ShuttingDown`] once [`close`](Self::close) has been called.
    /// * [`ActorSystemError::AlreadyRegistered`] if the actor type is taken; the existing
    ///   actor is left untouched.
    #[instrument(skip_all, fields(system = %self.0.name, actor_type = actor.actor_type()))]
    pub fn register<F>(
        &self,
        actor: Actor,
        message_type: impl Into<String>,
        handler: F,
    ) -> Result<ActorHandle, ActorSystemError>
    where
        F: Fn(Envelope) -> FutureBox + Send + Sync + 'static,
    {
        if actor.actor_type().trim().is_empty() {
            return Err(ActorSystemError::InvalidActor {
                actor_type: actor.actor_type().to_string(),
            });
        }
        let message_type = message_type.into();
        check_message_type(&message_type)?;

        match self.0.actors.entry(actor.actor_type().to_string()) {
            // Checked under the shard lock so a concurrent close snapshot sees this entry.
            _ if self.is_closing() => Err(ActorSystemError::ShuttingDown {
                system: self.0.name.clone(),
            }),
            Entry::Occupied(entry) => Err(ActorSystemError::AlreadyRegistered {
                actor_type: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let handle = ActorHandle::new(
                    &actor,
                    CloseAcknowledger::new(&self.0.actors),
                    self.0.work_ready.clone(),
                    &self.0.config,
                );
                handle.insert_handler(message_type, Arc::new(handler))?;
                info!("Registered actor {}", handle.id());
                entry.insert(handle.clone());
                Ok(handle)
            }
        }
    }

    /// Asks a registered actor to close without waiting for it.
    ///
    /// The actor drains its queued work, acknowledges, and is then removed from the
    /// registry.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ActorSystemError::NotRegistered`] if no actor has that type.
    pub fn unregister(&self, actor_type: &str) -> Result<(), ActorSystemError> {
        let handle = self.lookup(actor_type)?;
        debug!(actor = %handle.id(), "unregistering");
        tokio::spawn(async move {
            if let Err(err) = handle.request_close().await {
                warn!(actor = %handle.id(), %err, "close request was not delivered");
            }
        });
        Ok(())
    }

    /// Returns the actor registered under `actor_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ActorSystemError::NotRegistered`] if no actor has that type.
    pub fn lookup(&self, actor_type: &str) -> Result<ActorHandle, ActorSystemError> {
        self.0
            .actors
            .get(actor_type)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ActorSystemError::NotRegistered {
                actor_type: actor_type.to_string(),
            })
    }

    /// Launches the dispatcher over `inbound` and the executor.
    ///
    /// Must be called from within a Tokio runtime. Only the first call has an effect.
    pub fn start(&self, inbound: mpsc::Receiver<Envelope>) {
        if self.0.started.swap(true, Ordering::SeqCst) {
            warn!(system = %self.0.name, "actor system already started, ignoring");
            return;
        }
        info!("Starting actor system {}", self.0.name);
        self.0.loops.spawn(dispatcher::run(
            self.clone(),
            inbound,
            self.0.stop_loops.clone(),
        ));
        self.0
            .loops
            .spawn(executor::run(self.clone(), self.0.stop_loops.clone()));
    }

    /// Begins the shutdown handshake and returns immediately.
    ///
    /// Every actor registered at call time is asked to close. Once each of them has
    /// drained and acknowledged, the dispatcher and executor are stopped and `done` is
    /// signalled. An actor whose queued work never finishes holds `done` back indefinitely.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self, done), fields(system = %self.0.name))]
    pub fn close(&self, done: oneshot::Sender<()>) {
        if self.0.closing.swap(true, Ordering::SeqCst) {
            debug!("close already in progress");
        }
        let actors = self.snapshot();
        info!("Closing actor system {} with {} actors", self.0.name, actors.len());

        let system = self.clone();
        let watched = actors.clone();
        tokio::spawn(async move {
            let mut remaining = watched.len();
            let mut pending: FuturesUnordered<_> = watched
                .into_iter()
                .map(|actor| async move {
                    actor.closed().await;
                    actor
                })
                .collect();
            while let Some(actor) = pending.next().await {
                remaining -= 1;
                debug!(
                    "Actor {} acknowledged close, {} remaining",
                    actor.id(),
                    remaining
                );
            }
            system.stop_loops().await;
            info!("Actor system {} closed", system.0.name);
            if done.send(()).is_err() {
                debug!("close completion receiver dropped");
            }
        });

        tokio::spawn(async move {
            let requests = actors.into_iter().map(|actor| async move {
                if let Err(err) = actor.request_close().await {
                    error!("Error closing actor {}: {}", actor.id(), err);
                }
            });
            join_all(requests).await;
        });
    }

    /// Closes the system and waits for the handshake to complete.
    pub async fn shutdown(&self) {
        let (done, finished) = oneshot::channel();
        self.close(done);
        if finished.await.is_err() {
            error!(system = %self.0.name, "shutdown watcher ended without signalling");
        }
    }

    async fn stop_loops(&self) {
        trace!("Stopping dispatcher and executor");
        self.0.stop_loops.cancel();
        self.0.loops.close();
        self.0.loops.wait().await;
    }

    /// Clones the registered handles out so no registry guard outlives the call.
    pub(crate) fn snapshot(&self) -> Vec<ActorHandle> {
        self.0
            .actors
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub(crate) fn work_ready(&self) -> &Notify {
        &self.0.work_ready
    }
}
