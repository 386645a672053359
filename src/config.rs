// SPDX-License-Identifier: GPL-3.0-only

//! Engine configuration.
//!
//! Stored as JSON; every field is optional.
//!
//! ```json
//! {
//!     "hints": { "symbol_hint_mode": "hint_priority", "merge_hint_popups": false },
//!     "default_locale": "de-CH"
//! }
//! ```

use crate::app_settings::DEFAULT_LOCALE;
use crate::key::Subtype;
use crate::layout::ParseError;
use crate::popup::KeyHintConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User configuration for key computation and popup display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hint placement preferences
    pub hints: KeyHintConfiguration,
    /// BCP-47 tag used when no locale is requested
    pub default_locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hints: KeyHintConfiguration::default(),
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Builds the default subtype for `layout` from [`EngineConfig::default_locale`].
    pub fn default_subtype(&self, layout: impl Into<String>) -> Result<Subtype, ParseError> {
        Subtype::from_tag(0, &self.default_locale, layout)
    }
}

/// Loads the configuration from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig, ParseError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let json_str =
        fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, &path_str))?;
    let config: EngineConfig = serde_json::from_str(&json_str)
        .map_err(|e| ParseError::json_error_with_path(e, &path_str))?;

    tracing::debug!("Loaded config: {:?}", config);
    Ok(config)
}
