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

/// The logical name an actor is routed by.
///
/// An `Address` carries only the actor type. It is not a process-level identity:
/// two actors registered one after the other under the same type share an address,
/// while their internal ids (see [`ActorHandle::id`](crate::actor::ActorHandle::id)) differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Address {
    actor_type: String,
}

impl Address {
    /// Creates an address for the given actor type.
    pub fn new(actor_type: impl Into<String>) -> Self {
        Self {
            actor_type: actor_type.into(),
        }
    }

    /// Returns the actor type this address routes to.
    #[inline]
    #[must_use]
    pub fn actor_type(&self) -> &str {
        &self.actor_type
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.actor_type)
    }
}

impl From<&str> for Address {
    fn from(actor_type: &str) -> Self {
        Self::new(actor_type)
    }
}

impl From<String> for Address {
    fn from(actor_type: String) -> Self {
        Self::new(actor_type)
    }
}
