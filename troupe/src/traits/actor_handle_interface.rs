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

use std::fmt::Debug;

use async_trait::async_trait;

use crate::common::ActorSystemError;
use crate::message::Envelope;

/// The delivery surface of an actor, as seen by the dispatcher and by producers.
///
/// This is everything a collaborator may do to an actor it does not own: hand it an
/// envelope, ask it to close, and check whether it still schedules work. It is
/// implemented by [`ActorHandle`](crate::actor::ActorHandle).
#[async_trait]
pub trait ActorHandleInterface: Send + Sync + Debug {
    /// Returns whether envelopes handed to this actor will still be scheduled.
    ///
    /// This is a snapshot. Mailbox delivery keeps working after a close request until
    /// the actor is released, but only control envelopes are acted on once this
    /// returns `false`.
    fn is_accepting(&self) -> bool;

    /// Places an envelope in the actor's mailbox.
    ///
    /// Returns as soon as the envelope is queued; suspends while the mailbox is full.
    ///
    /// # Errors
    ///
    /// Returns [`ActorSystemError::MailboxClosed`] once the actor has completed its
    /// close handshake.
    async fn submit(&self, envelope: Envelope) -> Result<(), ActorSystemError>;

    /// Places the shutdown control envelope in the actor's mailbox.
    ///
    /// Does not wait for the actor to drain; see
    /// [`ActorHandle::closed`](crate::actor::ActorHandle::closed) for that.
    ///
    /// # Errors
    ///
    /// Returns [`ActorSystemError::MailboxClosed`] if the actor is already closed.
    async fn request_close(&self) -> Result<(), ActorSystemError>;
}
