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

use std::future::Future;
use std::sync::Arc;
use std::sync::Once;
use std::time::Duration;

use anyhow::bail;
use parking_lot::Mutex;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use troupe::prelude::*;

// Declare the submodules.
pub mod actors;
pub mod messages;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// How long a test waits for something that should happen promptly.
pub const PROMPTLY: Duration = Duration::from_secs(5);

/// Initializes the global tracing subscriber for tests.
///
/// Logs go to `logs/troupe_tests.txt` through a non-blocking appender. Runs once per
/// test binary no matter how many tests call it.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        let file_appender = RollingFileAppender::new(Rotation::NEVER, "logs", "troupe_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the non-blocking writer is not dropped before process exit
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new("trace")
            .add_directive("troupe::actor=trace".parse().unwrap())
            .add_directive("troupe::common::dispatcher=trace".parse().unwrap())
            .add_directive("troupe::common::executor=debug".parse().unwrap())
            .add_directive("registration_tests=trace".parse().unwrap())
            .add_directive("messaging_tests=trace".parse().unwrap())
            .add_directive("shutdown_tests=trace".parse().unwrap())
            .add_directive("tokio=info".parse().unwrap());

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(true)
            .without_time()
            .with_target(true)
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}

/// Builds a system that reports unhandled message types instead of exiting.
pub fn test_system(name: &str) -> ActorSystem {
    let mut config = TroupeConfig::default();
    config.behavior.unhandled_message = UnhandledMessagePolicy::Report;
    ActorSystem::with_config(name, config)
}

/// An ordered record of what handlers saw, shared between a test and its actors.
#[derive(Clone, Debug, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }
}

/// Polls `condition` until it holds, failing after [`PROMPTLY`].
pub async fn eventually(what: &str, condition: impl Fn() -> bool) -> anyhow::Result<()> {
    let deadline = tokio::time::Instant::now() + PROMPTLY;
    while !condition() {
        if tokio::time::Instant::now() >= deadline {
            bail!("timed out waiting for {what}");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    Ok(())
}

/// Awaits `future`, failing after [`PROMPTLY`].
pub async fn promptly<T>(what: &str, future: impl Future<Output = T>) -> anyhow::Result<T> {
    match tokio::time::timeout(PROMPTLY, future).await {
        Ok(value) => Ok(value),
        Err(_) => bail!("timed out waiting for {what}"),
    }
}
