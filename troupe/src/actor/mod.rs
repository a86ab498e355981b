//! Defines the actor: its registration descriptor, its shared handle, its action queue
//! and the processing task that turns mailbox envelopes into scheduled work.
//!
//! *   [`Actor`]: Describes an actor (its type and tuning) before registration.
//! *   [`ActorHandle`]: The live actor. Owns the mailbox, handler map, action queue and
//!     lifecycle state; cloned freely.
//! *   [`ActionQueue`]: The per-actor LIFO queue of scheduled messages.
//! *   [`ActorState`]: The `Registered → Active → Draining → Closed` lifecycle.

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

pub use action_queue::ActionQueue;
pub use actor_handle::ActorHandle;
pub(crate) use actor_handle::check_message_type;
pub use descriptor::Actor;
pub use lifecycle::ActorState;

/// Contains the [`ActionQueue`].
mod action_queue;

/// Contains [`ActorHandle`] and its scheduling and teardown logic.
mod actor_handle;

/// Contains the [`Actor`] registration descriptor.
mod descriptor;

/// Contains [`ActorState`] and the mailbox processing task.
mod lifecycle;
