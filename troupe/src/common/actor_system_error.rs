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

use thiserror::Error;

use crate::message::DeliveryMode;

/// Errors produced by the actor system.
///
/// Configuration errors (registration, handler setup, activation) are returned
/// to the caller. Routing errors are only ever logged by the dispatcher; the
/// producer of a dropped envelope is never notified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorSystemError {
    /// Registration with a blank actor type.
    #[error("invalid actor {actor_type:?}: actor type must not be blank")]
    InvalidActor {
        /// The rejected actor type.
        actor_type: String,
    },
    /// An actor with the same type is already registered.
    #[error("actor {actor_type} is already registered")]
    AlreadyRegistered {
        /// The duplicated actor type.
        actor_type: String,
    },
    /// A handler for the message type already exists on this actor.
    #[error("handler for message type {message_type} is already registered for actor {actor_type}")]
    DuplicateHandler {
        /// The actor the handler was offered to.
        actor_type: String,
        /// The message type that already has a handler.
        message_type: String,
    },
    /// Lookup or unregistration of an unknown actor type.
    #[error("actor {actor_type} is not registered")]
    NotRegistered {
        /// The actor type that was not found.
        actor_type: String,
    },
    /// A unicast envelope could not be delivered.
    #[error("cannot route to actor {target}: {reason}")]
    RoutingFailure {
        /// The intended target actor type.
        target: String,
        /// Why delivery failed.
        reason: RoutingFailureReason,
    },
    /// The envelope asked for a delivery mode the dispatcher does not implement.
    #[error("{mode} delivery is not supported")]
    UnsupportedMode {
        /// The requested mode.
        mode: DeliveryMode,
    },
    /// An actor received a message type it never registered a handler for.
    #[error("actor {actor_type} has no handler for message type {message_type}")]
    UnhandledMessageType {
        /// The receiving actor.
        actor_type: String,
        /// The unhandled message type.
        message_type: String,
    },
    /// The envelope failed validation before routing.
    #[error("invalid envelope from {sender}: {reason}")]
    InvalidEnvelope {
        /// The envelope's sender.
        sender: String,
        /// The violated rule.
        reason: String,
    },
    /// A handler cannot be registered for this message type.
    #[error("message type {message_type:?} cannot be handled: {reason}")]
    InvalidMessageType {
        /// The rejected message type.
        message_type: String,
        /// Why it was rejected.
        reason: String,
    },
    /// `activate` was called more than once.
    #[error("actor {actor_type} has already been activated")]
    AlreadyActivated {
        /// The actor type.
        actor_type: String,
    },
    /// The actor has completed its close handshake and released its mailbox.
    #[error("mailbox of actor {actor_type} is closed")]
    MailboxClosed {
        /// The actor type.
        actor_type: String,
    },
    /// The system has begun its shutdown handshake and refuses new registrations.
    #[error("actor system {system} is shutting down")]
    ShuttingDown {
        /// The system name.
        system: String,
    },
}

/// Why a unicast envelope was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingFailureReason {
    /// No actor is registered under the target type.
    TargetNotFound,
    /// The target exists but has stopped accepting envelopes.
    NotAccepting,
}

impl fmt::Display for RoutingFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetNotFound => f.write_str("target not found"),
            Self::NotAccepting => f.write_str("actor no longer accepting"),
        }
    }
}
