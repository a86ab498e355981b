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

/// Describes an actor before it is registered.
///
/// An `Actor` is only a name plus optional tuning. Registering it with
/// [`ActorSystem::register`](crate::common::ActorSystem::register) turns it into a live
/// actor reachable through an [`ActorHandle`](crate::actor::ActorHandle).
///
/// ```ignore
/// let printer = system.register(Actor::new("Printer"), "PRINT", |envelope| {
///     println!("{:?}", envelope.raw_payload());
///     Reply::ready()
/// })?;
/// printer.activate()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    actor_type: String,
    mailbox_capacity: Option<usize>,
}

impl Actor {
    /// Creates a descriptor for an actor of the given type.
    pub fn new(actor_type: impl Into<String>) -> Self {
        Self {
            actor_type: actor_type.into(),
            mailbox_capacity: None,
        }
    }

    /// Sets a custom mailbox capacity for this actor.
    ///
    /// Overrides `limits.mailbox_capacity` from the system configuration. A capacity
    /// of zero is raised to one.
    #[must_use]
    pub const fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = Some(capacity);
        self
    }

    /// Returns the actor type this descriptor will be registered under.
    #[inline]
    #[must_use]
    pub fn actor_type(&self) -> &str {
        &self.actor_type
    }

    #[inline]
    pub(crate) const fn mailbox_capacity(&self) -> Option<usize> {
        self.mailbox_capacity
    }
}
