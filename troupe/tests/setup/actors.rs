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
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::info;
use troupe::prelude::*;

use crate::setup::messages::{Greeting, BYE, ECHO, HI, PRINT, PRINTER, WORK};
use crate::setup::Journal;

/// Registers and activates a `Printer` that journals every `PRINT` payload.
pub fn printer(system: &ActorSystem, journal: &Journal) -> anyhow::Result<ActorHandle> {
    let journal = journal.clone();
    let handle = system.register(Actor::new(PRINTER), PRINT, move |envelope| {
        let value = envelope.payload::<i32>().copied().unwrap_or_default();
        info!(value, "printing");
        journal.record(value.to_string());
        Reply::ready()
    })?;
    handle.activate()?;
    Ok(handle)
}

/// Registers and activates an `Echo` actor answering `HI` and `BYE`.
pub fn echo(system: &ActorSystem, journal: &Journal) -> anyhow::Result<ActorHandle> {
    let on_hi = journal.clone();
    let handle = system.register(Actor::new(ECHO), HI, move |envelope| {
        let text = envelope.payload::<Greeting>().map(|g| g.0.clone());
        on_hi.record(format!("HI {}", text.unwrap_or_default()));
        Reply::ready()
    })?;
    let on_bye = journal.clone();
    handle.register_handler(BYE, move |envelope| {
        let journal = on_bye.clone();
        Reply::pending(async move {
            let text = envelope.payload::<Greeting>().map(|g| g.0.clone());
            journal.record(format!("BYE {}", text.unwrap_or_default()));
        })
    })?;
    handle.activate()?;
    Ok(handle)
}

/// Registers and activates a worker that waits for a permit from `gate` per `WORK`
/// and then counts it.
pub fn gated_worker(
    system: &ActorSystem,
    name: &str,
    gate: &Arc<Semaphore>,
    count: &Arc<AtomicUsize>,
) -> anyhow::Result<ActorHandle> {
    let gate = gate.clone();
    let count = count.clone();
    let handle = system.register(Actor::new(name), WORK, move |_| {
        let gate = gate.clone();
        let count = count.clone();
        Reply::pending(async move {
            if let Ok(permit) = gate.acquire().await {
                drop(permit);
                count.fetch_add(1, Ordering::SeqCst);
            }
        })
    })?;
    handle.activate()?;
    Ok(handle)
}

/// Builds a `WORK` envelope for `target`.
pub fn work_for(target: &str) -> Envelope {
    Envelope::unicast(WORK, crate::setup::messages::test_sender(), Address::new(target), ())
}
