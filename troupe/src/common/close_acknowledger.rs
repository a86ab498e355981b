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

use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tracing::trace;

use crate::actor::ActorHandle;

/// Registry keyed by actor type.
pub(crate) type ActorRegistry = DashMap<String, ActorHandle>;

/// The only capability an actor holds on the system that registered it.
///
/// An actor finishing its close handshake must leave the registry; it does not need,
/// and does not get, anything else of the system. The registry is held weakly so the
/// registry → actor → registry path never keeps either side alive.
#[derive(Debug, Clone, Default)]
pub(crate) struct CloseAcknowledger {
    registry: Weak<ActorRegistry>,
}

impl CloseAcknowledger {
    pub(crate) fn new(registry: &Arc<ActorRegistry>) -> Self {
        Self {
            registry: Arc::downgrade(registry),
        }
    }

    /// Removes the actor from the registry, but only if the entry is still this instance.
    pub(crate) fn acknowledge_close(&self, actor_type: &str, actor_id: &str) {
        let Some(registry) = self.registry.upgrade() else {
            trace!(actor_type, "registry already dropped, nothing to acknowledge");
            return;
        };
        let removed = registry.remove_if(actor_type, |_, handle| handle.id() == actor_id);
        trace!(
            actor_type,
            actor_id,
            removed = removed.is_some(),
            "close acknowledged"
        );
    }
}
