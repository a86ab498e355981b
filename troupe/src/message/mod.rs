//! Defines the envelope model that flows through the runtime.
//!
//! # Key Components
//!
//! *   [`Envelope`]: A message plus its routing metadata (message type, delivery mode,
//!     sender and target addresses) and an opaque payload.
//! *   [`Address`]: The logical actor-type name used for routing.
//! *   [`DeliveryMode`]: Unicast (single target) or broadcast (multi-target).
//! *   [`ActionableMessage`]: An accepted envelope paired with the handler resolved for it,
//!     waiting in an actor's action queue.
//! *   [`SystemSignal`]: Control signals (e.g. `Shutdown`) carried through mailboxes under
//!     reserved message types.

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
pub use actionable_message::ActionableMessage;
pub use address::Address;
pub use envelope::{DeliveryMode, Envelope};
pub use signal::{SystemSignal, SHUTDOWN_MESSAGE_TYPE};

// --- Submodules ---

/// Defines [`ActionableMessage`].
mod actionable_message;
/// Defines [`Address`].
mod address;
/// Defines [`Envelope`] and [`DeliveryMode`].
mod envelope;
/// Defines [`SystemSignal`] and the reserved control message types.
mod signal;
