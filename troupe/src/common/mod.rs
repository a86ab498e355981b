//! Provides the actor system and the runtime pieces shared across the crate.
//!
//! # Key Re-exported Components:
//!
//! *   [`ActorSystem`]: The registry plus the dispatcher and executor loops; owns
//!     registration, lookup, start and the shutdown handshake.
//! *   [`ActorSystemError`]: Every error the runtime produces.
//! *   [`TroupeConfig`]: Runtime configuration loaded from XDG locations, exposed
//!     globally as [`CONFIG`].
//! *   [`Reply`]: Helpers for building handler return values.

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
pub use actor_reply::Reply;
pub use actor_system::ActorSystem;
pub use actor_system_error::{ActorSystemError, RoutingFailureReason};
pub use config::{
    BehaviorConfig, DefaultsConfig, LimitsConfig, TroupeConfig, UnhandledMessagePolicy, CONFIG,
};
pub use types::*;

// --- Crate-Internal Re-exports ---
pub(crate) use close_acknowledger::CloseAcknowledger;

// --- Submodules ---

/// Defines the handler type aliases.
mod types;

/// Defines the `Reply` utility.
mod actor_reply;
/// Defines `ActorSystem`.
mod actor_system;
/// Defines the error enum.
mod actor_system_error;
/// Defines the capability actors use to leave the registry.
mod close_acknowledger;
/// Defines the configuration system.
pub mod config;
/// The loop routing inbound envelopes to mailboxes.
mod dispatcher;
/// The loop running scheduled messages.
mod executor;
