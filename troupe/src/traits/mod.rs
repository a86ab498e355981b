//! Defines the core traits of the runtime.
//!
//! *   [`ActorMessage`]: Marker trait for any value that can travel as an envelope payload.
//! *   [`ActorHandleInterface`]: The delivery surface of an actor (`submit`,
//!     `request_close`, `is_accepting`), implemented by
//!     [`ActorHandle`](crate::actor::ActorHandle).

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

// --- Public Re-exports ---
pub use actor_handle_interface::ActorHandleInterface;
pub use actor_message::ActorMessage;

// --- Submodules ---

/// Defines the [`ActorHandleInterface`] trait for actor interaction.
mod actor_handle_interface;
/// Defines the [`ActorMessage`] marker trait.
mod actor_message;
