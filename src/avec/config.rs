//! Decoder configuration.
//!
//! The configuration types deserialize from the shape supplied by the
//! surrounding application:
//!
//! ```json
//! {
//!   "type": "advanced",
//!   "ports": [1],
//!   "decoder": "trace",
//!   "config": {
//!     "label": "Motor",
//!     "ports": [
//!       {
//!         "port": 1,
//!         "traces": [
//!           { "primitive": "u16l", "graphId": "rpm" },
//!           { "primitive": "f32l", "graphId": "current" }
//!         ]
//!       }
//!     ]
//!   }
//! }
//! ```

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sans::schedule::{Schedule, Trace};

/// Configuration common to all decoders, wrapping a decoder-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig<C> {
    /// Category tag of the decoder.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Ports the transport should route to this decoder.
    pub ports: Vec<u32>,
    /// Which decoder implementation to use.
    pub decoder: String,
    pub config: C,
}

/// Payload configuring a [`TraceDecoder`](super::TraceDecoder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceDecoderConfig {
    /// Display label. Defaults to [`DEFAULT_LABEL`](super::DEFAULT_LABEL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub ports: Vec<PortConfig>,
}

/// The traces expected on a single port, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortConfig {
    pub port: u32,
    pub traces: Vec<Trace>,
}

/// An error rejecting a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A port was configured without traces.
    #[error("Port {port} has no traces.")]
    EmptySchedule { port: u32 },
    /// A port was configured more than once.
    #[error("Port {0} is configured more than once.")]
    DuplicatePort(u32),
}

impl TraceDecoderConfig {
    /// Validate port configurations, producing a schedule for each port.
    pub fn schedules(&self) -> Result<BTreeMap<u32, Schedule>, ConfigError> {
        let mut schedules = BTreeMap::new();

        for PortConfig { port, traces } in &self.ports {
            let port = *port;
            let schedule =
                Schedule::new(traces.clone()).ok_or(ConfigError::EmptySchedule { port })?;

            if schedules.insert(port, schedule).is_some() {
                Err(ConfigError::DuplicatePort(port))?;
            }
        }

        Ok(schedules)
    }
}
