//! Declarative state machine configuration.
//!
//! A [`Configuration`] names the initial state and, for every state, the
//! events it reacts to and where each one leads. Configurations are plain
//! serde data and can be read from JSON or YAML:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "run": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```
//!
//! Nothing here checks that `initial` or the transition targets name real
//! states. The machine reports those problems when it reaches them.

use crate::core::{EventName, StateName};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod error;
mod table;

pub use error::ConfigError;
pub use table::NameMap;

/// Event to destination mapping of one state.
pub type Transitions = NameMap<EventName, StateName>;

/// State name to definition mapping of a whole machine.
pub type StateTable = NameMap<StateName, StateDefinition>;

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub transitions: Transitions,
}

impl StateDefinition {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn with_transition(
        mut self,
        event: impl Into<EventName>,
        target: impl Into<StateName>,
    ) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    /// Destination for `event`, if this state reacts to it.
    pub fn target(&self, event: &str) -> Option<&StateName> {
        self.transitions.get(event)
    }
}

/// Complete description of a state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    pub initial: StateName,

    /// Every state, in declaration order
    #[serde(default)]
    pub states: StateTable,
}

impl Configuration {
    pub fn new(initial: impl Into<StateName>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(document)
    }

    /// Parse a configuration from a YAML document.
    pub fn from_yaml(document: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(document)
    }

    /// Read a configuration file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "Loading state machine configuration");

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        format.parse(&contents)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Supported configuration document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Deserialize a document in this format.
    pub fn parse<T: DeserializeOwned>(self, document: &str) -> Result<T, ConfigError> {
        match self {
            Self::Json => Ok(serde_json::from_str(document)?),
            Self::Yaml => Ok(serde_yaml::from_str(document)?),
        }
    }
}
