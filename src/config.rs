//! # Holder Configuration
//!
//! Startup configuration for [`RequestDispatchHolder`], loaded either from the
//! environment or from a YAML file.
//!
//! ## Environment Variables
//!
//! ### `BRRTR_HOLDER_ASYNC_SUPPORTED`
//!
//! Whether requests dispatched through the holder may suspend and resume
//! asynchronously. Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
//! (case-insensitive). Anything else is ignored.
//!
//! Default: `true`
//!
//! ## YAML
//!
//! ```yaml
//! async_supported: false
//! ```
//!
//! Missing keys keep their defaults.

use crate::holder::RequestDispatchHolder;
use crate::servlet::Servlet;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Environment variable read by [`HolderConfig::from_env`].
pub const ASYNC_SUPPORTED_ENV: &str = "BRRTR_HOLDER_ASYNC_SUPPORTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HolderConfig {
    /// Allow async dispatch (default: true)
    pub async_supported: bool,
}

impl Default for HolderConfig {
    fn default() -> Self {
        Self {
            async_supported: true,
        }
    }
}

impl HolderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let async_supported = env::var(ASYNC_SUPPORTED_ENV)
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);
        HolderConfig { async_supported }
    }

    /// Parse configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML for this shape.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: HolderConfig =
            serde_yaml::from_str(content).context("invalid holder configuration")?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to load holder config from {}", path.display()))
    }

    /// Write this configuration onto an existing holder.
    pub fn apply<S: Servlet>(&self, holder: &RequestDispatchHolder<S>) {
        holder.set_async_supported(self.async_supported);
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
