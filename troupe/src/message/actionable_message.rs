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

use crate::common::MessageHandler;
use crate::message::Envelope;

/// An envelope paired with the handler resolved for its message type.
///
/// The handler is looked up once, when the owning actor accepts the envelope, so a
/// scheduled message keeps running the handler it was accepted with. Consumed by
/// [`ActionableMessage::invoke`].
pub struct ActionableMessage {
    envelope: Envelope,
    handler: MessageHandler,
}

impl ActionableMessage {
    pub(crate) fn new(envelope: Envelope, handler: MessageHandler) -> Self {
        Self { envelope, handler }
    }

    /// Returns the envelope that will be handed to the handler.
    #[must_use]
    pub const fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Runs the handler to completion with the envelope.
    pub async fn invoke(self) {
        (self.handler)(self.envelope).await;
    }
}

impl fmt::Debug for ActionableMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionableMessage")
            .field("envelope", &self.envelope)
            .finish_non_exhaustive()
    }
}
