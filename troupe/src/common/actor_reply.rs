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

//! Convenient helpers for creating handler return types.
//!
//! Every handler returns a [`FutureBox`]. The [`Reply`] struct provides a namespace
//! for building one:
//!
//! ```ignore
//! // Synchronous handler - no async work needed
//! system.register(Actor::new("Printer"), "PRINT", |envelope| {
//!     println!("Got {:?}", envelope.raw_payload());
//!     Reply::ready()
//! })?;
//!
//! // Async handler
//! greeter.register_handler("HI", move |envelope| {
//!     let log = log.clone();
//!     Reply::pending(async move {
//!         log.send(envelope.sender().to_string()).await.ok();
//!     })
//! })?;
//! ```

use std::future::Future;

use crate::common::FutureBox;

/// A utility namespace for creating handler return types.
///
/// - [`Reply::ready()`] - For synchronous handlers with no async work
/// - [`Reply::pending()`] - For handlers with async work
pub struct Reply;

impl Reply {
    /// Creates an immediately resolving future for synchronous handlers.
    #[inline]
    #[must_use]
    pub fn ready() -> FutureBox {
        Box::pin(async move {})
    }

    /// Wraps an async block into the required handler return type.
    ///
    /// Use this when your handler needs to perform async operations like
    /// sending on a channel, awaiting I/O, or sleeping.
    #[inline]
    pub fn pending<F>(future: F) -> FutureBox
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Box::pin(future)
    }
}
