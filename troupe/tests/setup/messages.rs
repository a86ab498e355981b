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

use troupe::prelude::*;

pub const PRINT: &str = "PRINT";
pub const HI: &str = "HI";
pub const BYE: &str = "BYE";
pub const WORK: &str = "WORK";

pub const PRINTER: &str = "Printer";
pub const ECHO: &str = "Echo";

/// A greeting carried by `HI` and `BYE` envelopes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Greeting(pub String);

/// Address used as the sender of every envelope a test produces.
pub fn test_sender() -> Address {
    Address::new("TestProducer")
}

pub fn print(value: i32) -> Envelope {
    Envelope::unicast(PRINT, test_sender(), Address::new(PRINTER), value)
}

pub fn greet(message_type: &str, text: &str) -> Envelope {
    Envelope::unicast(
        message_type,
        test_sender(),
        Address::new(ECHO),
        Greeting(text.to_string()),
    )
}
