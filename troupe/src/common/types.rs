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

//! Handler type aliases shared across the crate.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::message::Envelope;

/// A pinned, boxed, `Send` future with `Output = ()`.
///
/// This is the return type of every message handler. [`Reply`](crate::common::Reply)
/// builds it without boilerplate.
pub type FutureBox = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A message handler: takes ownership of the envelope and returns the work to run.
///
/// Handlers are shared between the actor's handler map and every
/// [`ActionableMessage`](crate::message::ActionableMessage) scheduled with them.
pub type MessageHandler = Arc<dyn Fn(Envelope) -> FutureBox + Send + Sync + 'static>;
