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

use troupe::prelude::*;

use crate::{Reading, CONSOLE_PRINT};

pub const ACTOR_TYPE: &str = "GreetingActor";
pub const HI: &str = "HI";
pub const BYE: &str = "BYE";

/// Registers the greeter with its three handlers and starts it.
pub fn spawn(system: &ActorSystem) -> anyhow::Result<ActorHandle> {
    let greeter = system.register(Actor::new(ACTOR_TYPE), HI, |envelope| {
        let data = envelope.payload::<Reading>().map(|reading| reading.data);
        println!("Hi there {}, i got {:?}", envelope.sender(), data);
        Reply::ready()
    })?;
    greeter.register_handler(BYE, |envelope| {
        println!("Adios {} !!!", envelope.sender());
        Reply::ready()
    })?;
    greeter.register_handler(CONSOLE_PRINT, |envelope| {
        println!("Echo : {envelope:?}");
        Reply::ready()
    })?;
    greeter.activate()?;
    Ok(greeter)
}
