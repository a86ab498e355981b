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

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, trace, warn};

use crate::common::{ActorSystem, ActorSystemError, RoutingFailureReason};
use crate::message::{DeliveryMode, Envelope};
use crate::traits::ActorHandleInterface;

/// Moves envelopes from the inbound queue into the mailboxes of their targets.
///
/// Stops on cancellation or once every producer has dropped its sender. Routing errors
/// are logged and the envelope is dropped; the loop itself never fails.
#[instrument(skip_all, fields(system = %system.name()))]
pub(crate) async fn run(
    system: ActorSystem,
    mut inbound: mpsc::Receiver<Envelope>,
    stop: CancellationToken,
) {
    loop {
        let envelope = tokio::select! {
            biased;

            () = stop.cancelled() => break,

            incoming = inbound.recv() => match incoming {
                Some(envelope) => envelope,
                None => {
                    info!("Inbound queue closed by every producer");
                    break;
                }
            },
        };

        // A full mailbox suspends routing; cancellation must still get through.
        tokio::select! {
            biased;

            () = stop.cancelled() => break,

            routed = route(&system, envelope) => {
                if let Err(err) = routed {
                    warn!("{err}, dropping envelope");
                }
            }
        }
    }
    inbound.close();
    info!("Stopping message dispatcher");
}

async fn route(system: &ActorSystem, envelope: Envelope) -> Result<(), ActorSystemError> {
    envelope.validate()?;
    trace!(
        message_type = envelope.message_type(),
        sender = %envelope.sender(),
        mode = %envelope.mode(),
        "routing"
    );
    match envelope.mode() {
        DeliveryMode::Unicast => {
            let target = envelope
                .unicast_target()
                .map(|address| address.actor_type().to_string())
                .unwrap_or_default();
            let Ok(actor) = system.lookup(&target) else {
                return Err(ActorSystemError::RoutingFailure {
                    target,
                    reason: RoutingFailureReason::TargetNotFound,
                });
            };
            if !actor.is_accepting() {
                return Err(ActorSystemError::RoutingFailure {
                    target,
                    reason: RoutingFailureReason::NotAccepting,
                });
            }
            actor.submit(envelope).await
        }
        DeliveryMode::Broadcast => Err(ActorSystemError::UnsupportedMode {
            mode: DeliveryMode::Broadcast,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;
    use crate::common::{Reply, TroupeConfig, UnhandledMessagePolicy};
    use crate::message::Address;

    fn system() -> ActorSystem {
        let mut config = TroupeConfig::default();
        config.behavior.unhandled_message = UnhandledMessagePolicy::Report;
        ActorSystem::with_config("DispatcherTest", config)
    }

    fn to(target: &str) -> Envelope {
        Envelope::unicast("PING", Address::new("Test"), Address::new(target), ())
    }

    #[tokio::test]
    async fn unknown_target_is_a_routing_failure() {
        let system = system();
        let err = route(&system, to("Ghost")).await.unwrap_err();
        assert_eq!(
            err,
            ActorSystemError::RoutingFailure {
                target: "Ghost".to_string(),
                reason: RoutingFailureReason::TargetNotFound,
            }
        );
    }

    #[tokio::test]
    async fn broadcast_is_unsupported() {
        let system = system();
        let envelope = Envelope::broadcast("PING", Address::new("Test"), [Address::new("A")], ());
        assert_eq!(
            route(&system, envelope).await,
            Err(ActorSystemError::UnsupportedMode {
                mode: DeliveryMode::Broadcast
            })
        );
    }

    #[tokio::test]
    async fn unicast_lands_in_the_target_mailbox() {
        let system = system();
        system
            .register(Actor::new("Pinger"), "PING", |_| Reply::ready())
            .expect("register");
        assert!(route(&system, to("Pinger")).await.is_ok());
    }

    #[tokio::test]
    async fn draining_target_is_a_routing_failure() {
        let system = system();
        let pinger = system
            .register(Actor::new("Pinger"), "PING", |_| Reply::ready())
            .expect("register");
        pinger.activate().expect("activate");

        // Nothing executes here, so the queued ping keeps the actor draining.
        route(&system, to("Pinger")).await.expect("first ping");
        while pinger.queued_actions() == 0 {
            tokio::task::yield_now().await;
        }
        pinger.request_close().await.expect("close request");
        while pinger.is_accepting() {
            tokio::task::yield_now().await;
        }

        assert_eq!(
            route(&system, to("Pinger")).await,
            Err(ActorSystemError::RoutingFailure {
                target: "Pinger".to_string(),
                reason: RoutingFailureReason::NotAccepting,
            })
        );
    }
}
