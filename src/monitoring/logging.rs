// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Structured logging setup.
//!
//! Logs go to stderr so stdout stays free for command output.
//! - `BCS_LOG`: `EnvFilter` directives (default `info`)
//! - `BCS_LOG_JSON=1`: JSON lines instead of compact text

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives variable.
pub const LOG_FILTER_ENV: &str = "BCS_LOG";
/// JSON output switch variable.
pub const LOG_JSON_ENV: &str = "BCS_LOG_JSON";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    Compact,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Read from `BCS_LOG_JSON` (`1`/`true` selects JSON).
    pub fn from_env() -> Self {
        match std::env::var(LOG_JSON_ENV) {
            Ok(v) if matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(default_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    let res = match format {
        LogFormat::Compact => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json().with_target(true))
            .try_init(),
    };
    if res.is_ok() {
        tracing::debug!(?format, "logging initialized");
    }
}
