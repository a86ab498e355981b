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
use std::any::Any;
use std::fmt::Debug;

/// A marker trait for values that can ride in an [`Envelope`](crate::message::Envelope) payload.
///
/// The runtime never inspects a payload; it only moves it from the producer to the
/// handler. Handlers recover the concrete type with
/// [`Envelope::payload`](crate::message::Envelope::payload), which goes through
/// [`ActorMessage::as_any`].
///
/// A blanket implementation covers every `Any + Send + Sync + Debug` type, so integers,
/// strings, maps and user structs deriving `Debug` can all be sent as-is.
pub trait ActorMessage: Any + Send + Sync + Debug {
    /// Returns the payload as a dynamic [`Any`] trait object for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T> ActorMessage for T
where
    T: Any + Send + Sync + Debug,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}
