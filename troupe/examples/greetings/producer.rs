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

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use troupe::prelude::*;

use crate::{greeter, printer, Reading, CONSOLE_PRINT};

/// Feeds the inbound queue every 50 ms until the dispatcher goes away.
pub async fn pump(inbound: mpsc::Sender<Envelope>) {
    let sender = Address::new(CONFIG.defaults.system_sender.clone());
    let printer = Address::new(printer::ACTOR_TYPE);
    let greeter = Address::new(greeter::ACTOR_TYPE);

    loop {
        let batch = [
            // Broadcasts are not routed; the dispatcher logs and drops this one.
            Envelope::broadcast(
                CONSOLE_PRINT,
                sender.clone(),
                [printer.clone(), greeter.clone()],
                reading(),
            ),
            Envelope::unicast(CONSOLE_PRINT, sender.clone(), greeter.clone(), reading()),
            Envelope::unicast(CONSOLE_PRINT, sender.clone(), printer.clone(), reading()),
            Envelope::unicast(greeter::HI, sender.clone(), greeter.clone(), reading()),
            Envelope::unicast(greeter::BYE, sender.clone(), greeter.clone(), reading()),
        ];
        for envelope in batch {
            if inbound.send(envelope).await.is_err() {
                debug!("inbound queue closed, producer stopping");
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

fn reading() -> Reading {
    Reading {
        data: rand::random(),
    }
}
