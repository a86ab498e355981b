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

use tokio::sync::{mpsc, oneshot};
use tracing::{instrument, trace, warn};

use crate::actor::ActorHandle;
use crate::message::Envelope;

/// Lifecycle of an actor: `Registered → Active → Draining → Closed`.
///
/// The states only ever move forward. An actor accepts work while `Registered` or
/// `Active`; once a shutdown request is processed it is `Draining` and never accepts
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActorState {
    /// Registered with the system, processing task not yet started.
    Registered = 0,
    /// Processing task running; envelopes are scheduled.
    Active = 1,
    /// Shutdown requested; waiting for the action queue to empty.
    Draining = 2,
    /// Close acknowledged and resources released. Terminal.
    Closed = 3,
}

impl ActorState {
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Registered,
            1 => Self::Active,
            2 => Self::Draining,
            _ => Self::Closed,
        }
    }

    /// Returns `true` while new envelopes are still scheduled.
    #[must_use]
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::Registered | Self::Active)
    }
}

/// The receiving ends created at registration and handed to the processing task.
pub(crate) struct Wiring {
    pub(crate) mailbox: mpsc::Receiver<Envelope>,
    pub(crate) close_tx: oneshot::Sender<()>,
    pub(crate) close_rx: oneshot::Receiver<()>,
}

// The processing task: the one place an actor's mailbox is read.
#[instrument(skip_all, fields(actor = %actor.id()))]
pub(crate) async fn process_mailbox(actor: ActorHandle, wiring: Wiring) {
    let Wiring {
        mut mailbox,
        close_tx,
        mut close_rx,
    } = wiring;
    let mut close_tx = Some(close_tx);

    loop {
        tokio::select! {
            biased;

            _ = &mut close_rx => {
                trace!("close signal received for actor: {}", actor.id());
                break;
            }

            incoming = mailbox.recv() => {
                let Some(envelope) = incoming else {
                    warn!("mailbox of actor {} closed unexpectedly", actor.id());
                    break;
                };
                trace!(
                    "Actor {} with id {} got message {}",
                    actor.actor_type(),
                    actor.id(),
                    envelope.message_type()
                );
                if envelope.is_control() {
                    actor.begin_draining(close_tx.take());
                } else {
                    actor.schedule(envelope);
                }
            }
        }
    }

    // Release the mailbox before acknowledging so late submitters see it closed.
    mailbox.close();
    drop(mailbox);
    actor.finish_close();
}
