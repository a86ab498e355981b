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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Troupe
//!
//! A small actor runtime on top of Tokio. Actors are registered by type name in an
//! [`ActorSystem`](prelude::ActorSystem), receive [`Envelope`](prelude::Envelope)s through a
//! bounded mailbox and run the handler registered for each message type.
//!
//! ## Key Concepts
//!
//! - **Actor system (`ActorSystem`)**: The registry, the dispatcher that routes inbound
//!   envelopes to mailboxes and the executor that runs scheduled work.
//! - **Actors (`ActorHandle`)**: Named units with a handler per message type, a bounded
//!   mailbox and a LIFO action queue.
//! - **Messaging**: Producers push `Envelope`s into the inbound queue given to
//!   `ActorSystem::start`; payloads implement `ActorMessage`.
//! - **Lifecycle**: `Registered → Active → Draining → Closed`. A close request makes an
//!   actor stop accepting, drain its queue and acknowledge.
//! - **Shutdown**: `ActorSystem::close` asks every actor to close and signals completion
//!   once all have acknowledged and both loops have stopped.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use troupe::prelude::*;
//!
//! let system = ActorSystem::new("Stage");
//! let printer = system.register(Actor::new("Printer"), "PRINT", |envelope| {
//!     println!("{:?}", envelope.payload::<i32>());
//!     Reply::ready()
//! })?;
//! printer.activate()?;
//!
//! let (inbound, receiver) = system.inbound_channel();
//! system.start(receiver);
//! inbound
//!     .send(Envelope::unicast("PRINT", "Main".into(), "Printer".into(), 42_i32))
//!     .await?;
//!
//! system.shutdown().await;
//! ```

/// Internal utilities and structures used throughout the runtime.
pub(crate) mod common;

/// Defines the actor structures and lifecycle.
pub(crate) mod actor;

/// Defines envelopes, addresses and control signals.
pub(crate) mod message;

/// Defines core traits used throughout the runtime.
pub(crate) mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// ## External Crates
/// *   [`async_trait::async_trait`](https://docs.rs/async-trait/latest/async_trait/attr.async_trait.html): Needed to implement [`ActorHandleInterface`](crate::traits::ActorHandleInterface).
///
/// ## Core Types
/// *   [`crate::common::ActorSystem`]: The registry and its dispatcher and executor loops.
/// *   [`crate::actor::Actor`]: Registration descriptor.
/// *   [`crate::actor::ActorHandle`]: Handle to a registered actor.
/// *   [`crate::actor::ActorState`]: Actor lifecycle state.
/// *   [`crate::actor::ActionQueue`]: Per-actor LIFO queue of scheduled messages.
/// *   [`crate::message::Envelope`]: A routed message.
/// *   [`crate::message::Address`]: An actor's routing name.
/// *   [`crate::message::DeliveryMode`]: Unicast or broadcast.
/// *   [`crate::message::ActionableMessage`]: An envelope paired with its handler.
/// *   [`crate::message::SystemSignal`]: Control signals carried through mailboxes.
/// *   [`crate::common::Reply`]: Utility for creating handler return values.
/// *   [`crate::common::ActorSystemError`]: The runtime's error type.
/// *   [`crate::common::TroupeConfig`]: Runtime configuration.
/// *   [`crate::traits::ActorMessage`]: Marker trait for payloads.
/// *   [`crate::traits::ActorHandleInterface`]: Delivery trait implemented by handles.
pub mod prelude {
    // External crate re-exports
    pub use async_trait::async_trait;

    // Core types
    pub use crate::actor::{ActionQueue, Actor, ActorHandle, ActorState};
    pub use crate::common::{
        ActorSystem, ActorSystemError, BehaviorConfig, DefaultsConfig, FutureBox, LimitsConfig,
        MessageHandler, Reply, RoutingFailureReason, TroupeConfig, UnhandledMessagePolicy,
        CONFIG,
    };
    pub use crate::message::{
        ActionableMessage, Address, DeliveryMode, Envelope, SystemSignal, SHUTDOWN_MESSAGE_TYPE,
    };
    pub use crate::traits::{ActorHandleInterface, ActorMessage};
}
