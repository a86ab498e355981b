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

//! Two actors on the default system, fed by a producer until Ctrl-C or SIGTERM.
//!
//! Run with `RUST_LOG=troupe=debug cargo run --example greetings` to watch routing.

use tokio::sync::oneshot;
use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

use troupe::prelude::*;

mod greeter;
mod printer;
mod producer;

/// Message type understood by both actors.
pub const CONSOLE_PRINT: &str = "CONSOLE_PRINT";

/// The payload every produced envelope carries.
#[derive(Clone, Debug)]
pub struct Reading {
    pub data: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_span_events(FmtSpan::NONE)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let system = ActorSystem::default_system();
    printer::spawn(&system)?;
    greeter::spawn(&system)?;

    let (inbound, receiver) = system.inbound_channel();
    system.start(receiver);
    let pump = tokio::spawn(producer::pump(inbound));

    wait_for_termination().await?;
    println!("\n\n******--- Shutting down ---******");
    pump.abort();

    let (done, finished) = oneshot::channel();
    system.close(done);
    finished.await?;
    println!("\n\n******--- Actor system is stopped, exiting ---******");
    info!("bye");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_termination() -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_termination() -> anyhow::Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
