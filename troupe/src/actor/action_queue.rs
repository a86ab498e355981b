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
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{watch, Notify};

use crate::message::ActionableMessage;

/// A per-actor, last-in-first-out queue of scheduled work.
///
/// The owning actor's processing task pushes, the executor pops. The most recently
/// scheduled message is always the next one handed out, so within one actor
/// messages execute in the reverse of their arrival order.
///
/// Every operation takes the queue's own lock; nothing outside this actor contends
/// on it. Each change of length is published on a `watch` channel so a draining
/// actor can wait for zero without polling, and each push wakes the executor
/// through the system-wide work notification.
pub struct ActionQueue {
    stack: Mutex<Vec<ActionableMessage>>,
    depth: watch::Sender<usize>,
    work_ready: Arc<Notify>,
}

impl ActionQueue {
    pub(crate) fn new(work_ready: Arc<Notify>) -> Self {
        let (depth, _) = watch::channel(0);
        Self {
            stack: Mutex::new(Vec::new()),
            depth,
            work_ready,
        }
    }

    /// Schedules a message on top of the stack.
    pub fn push(&self, action: ActionableMessage) {
        {
            let mut stack = self.stack.lock();
            stack.push(action);
            self.depth.send_replace(stack.len());
        }
        self.work_ready.notify_one();
    }

    /// Removes and returns the most recently scheduled message, or `None` when empty.
    pub fn pop(&self) -> Option<ActionableMessage> {
        let mut stack = self.stack.lock();
        let action = stack.pop();
        if action.is_some() {
            self.depth.send_replace(stack.len());
        }
        action
    }

    /// Discards every scheduled message.
    pub fn clear(&self) {
        let mut stack = self.stack.lock();
        stack.clear();
        self.depth.send_replace(0);
    }

    /// Returns the number of scheduled messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.lock().len()
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }

    /// Resolves once the queue is empty, immediately if it already is.
    pub async fn wait_until_empty(&self) {
        let mut depth = self.depth.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = depth.wait_for(|len| *len == 0).await;
    }
}

impl fmt::Debug for ActionQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionQueue")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
