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

use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Configuration for the Troupe runtime
///
/// This struct contains all configurable values for the runtime,
/// loaded from TOML files in XDG-compliant directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TroupeConfig {
    /// Limits and capacity configuration
    pub limits: LimitsConfig,
    /// Default values configuration
    pub defaults: DefaultsConfig,
    /// Behavioral configuration switches
    pub behavior: BehaviorConfig,
}

/// Limits and capacity configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Capacity of each actor's mailbox before submitters are suspended
    pub mailbox_capacity: usize,
    /// Capacity of the inbound queue built by `ActorSystem::inbound_channel`
    pub inbound_capacity: usize,
}

/// Default configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Name of the process-wide default actor system
    pub system_name: String,
    /// Sender address stamped on control envelopes
    pub system_sender: String,
}

/// Behavioral configuration switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// What an actor does when it receives a message type it has no handler for
    pub unhandled_message: UnhandledMessagePolicy,
}

/// Reaction to an envelope whose message type the receiving actor never declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhandledMessagePolicy {
    /// Log the error and terminate the process with exit status 1.
    #[default]
    Terminate,
    /// Log the error, count it on the actor and drop the envelope.
    Report,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 10,
            inbound_capacity: 10,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            system_name: "DefaultActorSystem".to_string(),
            system_sender: "ActorSystem".to_string(),
        }
    }
}

impl TroupeConfig {
    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `troupe/config.toml` under `$XDG_CONFIG_HOME` and then the XDG
    /// config dirs. If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("troupe") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        match xdg_dirs.find_config_file("config.toml") {
            Some(path) => Self::load_from(&path),
            None => {
                info!("No configuration file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        info!("Loading configuration from: {}", path.display());
        match std::fs::read_to_string(path) {
            Ok(config_str) => match Self::from_toml_str(&config_str) {
                Ok(config) => {
                    info!("Successfully loaded configuration");
                    config
                }
                Err(e) => {
                    error!("Failed to parse configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text. Missing sections and keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialization error if the text is malformed.
    pub fn from_toml_str(config_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_str)
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: TroupeConfig = TroupeConfig::load();
}
