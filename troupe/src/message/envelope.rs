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
use std::sync::Arc;

use crate::common::ActorSystemError;
use crate::message::{Address, SystemSignal};
use crate::traits::ActorMessage;

/// How an envelope is meant to be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryMode {
    /// Delivered to the single actor named by the envelope's unicast target.
    Unicast,
    /// Addressed to every actor in the envelope's broadcast targets.
    ///
    /// The dispatcher does not fan broadcasts out; they are reported as
    /// [`ActorSystemError::UnsupportedMode`] and dropped.
    Broadcast,
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicast => f.write_str("Unicast"),
            Self::Broadcast => f.write_str("Broadcast"),
        }
    }
}

/// A message plus the metadata needed to route it.
///
/// Envelopes are built by producers with [`Envelope::unicast`] or [`Envelope::broadcast`],
/// pushed into the inbound queue handed to [`ActorSystem::start`](crate::common::ActorSystem::start),
/// and consumed once by the dispatcher. The payload is shared behind an `Arc`, so cloning
/// an envelope never clones the payload itself.
#[derive(Clone)]
pub struct Envelope {
    message_type: String,
    mode: DeliveryMode,
    payload: Arc<dyn ActorMessage>,
    sender: Address,
    unicast_target: Option<Address>,
    broadcast_targets: Vec<Address>,
}

impl Envelope {
    /// Builds an envelope for a single target actor.
    pub fn unicast(
        message_type: impl Into<String>,
        sender: Address,
        target: Address,
        payload: impl ActorMessage,
    ) -> Self {
        Self {
            message_type: message_type.into(),
            mode: DeliveryMode::Unicast,
            payload: Arc::new(payload),
            sender,
            unicast_target: Some(target),
            broadcast_targets: Vec::new(),
        }
    }

    /// Builds an envelope addressed to several actors.
    ///
    /// An empty target list still produces an envelope; it fails [`Envelope::validate`].
    pub fn broadcast(
        message_type: impl Into<String>,
        sender: Address,
        targets: impl IntoIterator<Item = Address>,
        payload: impl ActorMessage,
    ) -> Self {
        Self {
            message_type: message_type.into(),
            mode: DeliveryMode::Broadcast,
            payload: Arc::new(payload),
            sender,
            unicast_target: None,
            broadcast_targets: targets.into_iter().collect(),
        }
    }

    /// Builds the control envelope carrying `signal` to `target`.
    pub(crate) fn control(signal: SystemSignal, sender: Address, target: Address) -> Self {
        Self::unicast(signal.message_type(), sender, target, ())
    }

    /// Returns the message type handlers are resolved by.
    #[inline]
    #[must_use]
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Returns the delivery mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// Returns the address of the producer.
    #[inline]
    #[must_use]
    pub const fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the target of a unicast envelope.
    #[inline]
    #[must_use]
    pub const fn unicast_target(&self) -> Option<&Address> {
        self.unicast_target.as_ref()
    }

    /// Returns the targets of a broadcast envelope.
    #[inline]
    #[must_use]
    pub fn broadcast_targets(&self) -> &[Address] {
        &self.broadcast_targets
    }

    /// Downcasts the payload to `T`, returning `None` if it holds another type.
    #[must_use]
    pub fn payload<T: ActorMessage>(&self) -> Option<&T> {
        self.payload.as_ref().as_any().downcast_ref::<T>()
    }

    /// Returns the type-erased payload.
    #[must_use]
    pub fn raw_payload(&self) -> &dyn ActorMessage {
        self.payload.as_ref()
    }

    /// Returns `true` if this envelope carries a [`SystemSignal`].
    #[must_use]
    pub fn is_control(&self) -> bool {
        SystemSignal::from_message_type(&self.message_type).is_some()
    }

    /// Checks the envelope before it is routed.
    ///
    /// Rejects blank message types, the reserved control types, a unicast envelope
    /// without a target and a broadcast envelope without targets.
    ///
    /// # Errors
    ///
    /// Returns [`ActorSystemError::InvalidEnvelope`] describing the first violation found.
    pub fn validate(&self) -> Result<(), ActorSystemError> {
        let reason = if self.message_type.trim().is_empty() {
            Some("message type is blank")
        } else if self.is_control() {
            Some("message type is reserved for system control")
        } else {
            match self.mode {
                DeliveryMode::Unicast if self.unicast_target.is_none() => {
                    Some("unicast envelope has no target")
                }
                DeliveryMode::Broadcast if self.broadcast_targets.is_empty() => {
                    Some("broadcast envelope has no targets")
                }
                _ => None,
            }
        };
        reason.map_or(Ok(()), |reason| {
            Err(ActorSystemError::InvalidEnvelope {
                sender: self.sender.to_string(),
                reason: reason.to_string(),
            })
        })
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("message_type", &self.message_type)
            .field("mode", &self.mode)
            .field("sender", &self.sender)
            .field("unicast_target", &self.unicast_target)
            .field("broadcast_targets", &self.broadcast_targets)
            .field("payload", &self.payload)
            .finish()
    }
}
