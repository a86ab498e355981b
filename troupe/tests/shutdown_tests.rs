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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Semaphore};
use troupe::prelude::*;

use crate::setup::{
    actors::{gated_worker, printer, work_for},
    eventually, initialize_tracing,
    messages::{print, WORK},
    promptly, test_system, Journal,
};

mod setup;

/// With no actors registered, close completes straight away.
#[tokio::test(flavor = "multi_thread")]
async fn test_close_without_actors_finishes_immediately() -> anyhow::Result<()> {
    initialize_tracing();
    let system = test_system("Empty");
    let (_inbound, receiver) = system.inbound_channel();
    system.start(receiver);

    let (done, finished) = oneshot::channel();
    system.close(done);
    tokio::time::timeout(Duration::from_millis(500), finished).await??;
    Ok(())
}

/// Close is also fine on a system that was never started.
#[tokio::test(flavor = "multi_thread")]
async fn test_close_before_start() -> anyhow::Result<()> {
    initialize_tracing();
    let system = test_system("NeverStarted");
    promptly("shutdown", system.shutdown()).await?;
    assert!(system.is_closing());
    Ok(())
}

/// Every message queued before close runs before `done` fires.
///
/// Three workers get 3, 5 and 2 messages directly through their mailboxes, so the
/// shutdown request is queued behind them. The handlers are held on a gate until
/// `close` has been called, so the work is still queued when the handshake begins.
#[tokio::test(flavor = "multi_thread")]
async fn test_actors_drain_before_done() -> anyhow::Result<()> {
    initialize_tracing();
    let system = test_system("Drain");
    let gate = Arc::new(Semaphore::new(0));
    let handled = Arc::new(AtomicUsize::new(0));
    let plan = [("Alpha", 3), ("Beta", 5), ("Gamma", 2)];

    let mut workers = Vec::new();
    for (name, _) in plan {
        workers.push(gated_worker(&system, name, &gate, &handled)?);
    }
    for (worker, (name, messages)) in workers.iter().zip(plan) {
        for _ in 0..messages {
            worker.submit(work_for(name)).await?;
        }
    }
    eventually("all work to be scheduled", || {
        workers.iter().map(ActorHandle::queued_actions).sum::<usize>() == 10
    })
    .await?;

    let (_inbound, receiver) = system.inbound_channel();
    system.start(receiver);
    let (done, mut finished) = oneshot::channel();
    system.close(done);

    eventually("every worker to drain", || {
        workers.iter().all(|worker| worker.state() == ActorState::Draining)
    })
    .await?;
    let early = tokio::time::timeout(Duration::from_millis(200), &mut finished).await;
    assert!(early.is_err(), "close finished with work still queued");
    assert_eq!(handled.load(Ordering::SeqCst), 0);
    assert_eq!(system.actor_count(), 3);

    gate.add_permits(10);
    promptly("close to finish", finished).await??;

    assert_eq!(handled.load(Ordering::SeqCst), 10);
    assert_eq!(system.actor_count(), 0);
    for worker in &workers {
        assert_eq!(worker.state(), ActorState::Closed);
        assert_eq!(worker.queued_actions(), 0);
        assert!(matches!(
            system.lookup(worker.actor_type()),
            Err(ActorSystemError::NotRegistered { .. })
        ));
    }
    Ok(())
}

/// An actor whose queued work never finishes holds `done` back; the others still close.
#[tokio::test(flavor = "multi_thread")]
async fn test_stalled_actor_blocks_done() -> anyhow::Result<()> {
    initialize_tracing();
    let system = test_system("Stalled");
    let stuck = system.register(Actor::new("Stuck"), WORK, |_| {
        Reply::pending(futures::future::pending::<()>())
    })?;
    stuck.activate()?;
    let quick = printer(&system, &Journal::default())?;

    stuck.submit(work_for("Stuck")).await?;
    stuck.submit(work_for("Stuck")).await?;
    eventually("both messages to be scheduled", || stuck.queued_actions() == 2).await?;

    let (_inbound, receiver) = system.inbound_channel();
    system.start(receiver);
    let (done, finished) = oneshot::channel();
    system.close(done);

    promptly("the idle actor to close", quick.closed()).await?;
    let outcome = tokio::time::timeout(Duration::from_millis(300), finished).await;
    assert!(outcome.is_err(), "close finished with a stalled actor");
    assert_eq!(stuck.state(), ActorState::Draining);
    assert!(system.lookup("Stuck").is_ok());
    assert_eq!(system.actor_count(), 1);
    Ok(())
}

/// Once `done` fires the dispatcher is gone and the inbound queue refuses sends.
#[tokio::test(flavor = "multi_thread")]
async fn test_inbound_is_closed_after_done() -> anyhow::Result<()> {
    initialize_tracing();
    let system = test_system("ClosedInbound");
    let journal = Journal::default();
    printer(&system, &journal)?;

    let (inbound, receiver) = system.inbound_channel();
    system.start(receiver);
    inbound.send(print(1)).await?;
    eventually("the print", || journal.len() == 1).await?;

    promptly("shutdown", system.shutdown()).await?;
    assert!(inbound.send(print(2)).await.is_err());
    assert_eq!(journal.len(), 1);
    Ok(())
}

/// A second start is ignored and does not spawn a second pair of loops.
#[tokio::test(flavor = "multi_thread")]
async fn test_second_start_is_ignored() -> anyhow::Result<()> {
    initialize_tracing();
    let system = test_system("StartTwice");
    let journal = Journal::default();
    printer(&system, &journal)?;

    let (inbound, receiver) = system.inbound_channel();
    system.start(receiver);
    let (other_inbound, other_receiver) = system.inbound_channel();
    system.start(other_receiver);

    inbound.send(print(1)).await?;
    eventually("the print", || journal.len() == 1).await?;
    // The ignored receiver was dropped, so its sender sees a closed queue.
    assert!(other_inbound.send(print(2)).await.is_err());
    promptly("shutdown", system.shutdown()).await?;
    Ok(())
}
