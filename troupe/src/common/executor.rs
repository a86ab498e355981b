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

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, trace};

use crate::common::ActorSystem;

// Runs scheduled messages one at a time, taking at most one per actor per pass.
#[instrument(skip_all, fields(system = %system.name()))]
pub(crate) async fn run(system: ActorSystem, stop: CancellationToken) {
    'passes: loop {
        // Registered before the pass so a push during the pass is not missed.
        let work_ready = system.work_ready().notified();
        tokio::pin!(work_ready);
        work_ready.as_mut().enable();

        let mut executed = 0_usize;
        for actor in system.snapshot() {
            if stop.is_cancelled() {
                break 'passes;
            }
            let Some(action) = actor.next_actionable() else {
                continue;
            };
            trace!(
                actor = %actor.id(),
                message_type = action.envelope().message_type(),
                "executing"
            );
            // Runs to completion even if the loop is cancelled meanwhile.
            if AssertUnwindSafe(action.invoke()).catch_unwind().await.is_err() {
                error!("Handler of actor {} panicked", actor.id());
            }
            executed += 1;
        }

        if executed == 0 {
            tokio::select! {
                biased;

                () = stop.cancelled() => break,

                () = &mut work_ready => {}
            }
        }
    }
    info!("Stopping message executor");
}
