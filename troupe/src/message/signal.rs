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

/// Message type reserved for the shutdown control envelope.
///
/// Application handlers may not be registered for this type, and envelopes carrying
/// it are rejected when they arrive through the inbound queue.
pub const SHUTDOWN_MESSAGE_TYPE: &str = "SHUTDOWN";

/// System-level control signals carried through an actor's mailbox.
///
/// Signals travel as ordinary envelopes whose message type is reserved, so they
/// are ordered with respect to the application envelopes queued before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SystemSignal {
    /// Asks an actor to stop accepting work, drain its action queue and acknowledge.
    Shutdown,
}

impl SystemSignal {
    /// Returns the reserved message type carrying this signal.
    #[must_use]
    pub const fn message_type(self) -> &'static str {
        match self {
            Self::Shutdown => SHUTDOWN_MESSAGE_TYPE,
        }
    }

    /// Maps a message type back to the signal it reserves, if any.
    #[must_use]
    pub fn from_message_type(message_type: &str) -> Option<Self> {
        match message_type {
            SHUTDOWN_MESSAGE_TYPE => Some(Self::Shutdown),
            _ => None,
        }
    }
}
