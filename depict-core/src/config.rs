//! Configuration for depict.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment -> overrides.
//! The workspace-local file lives at `.depict/config.toml`.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::taxonomy::{DataType, Task, UsageMode};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepictConfig {
    /// Tracing output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Defaults used when building interpreters from configuration.
    #[serde(default)]
    pub interpreter: InterpreterDefaults,
}

/// Tracing output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// Include the event target (module path) in each line.
    #[serde(default)]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            with_target: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Optional interpreter inputs. Which ones are required depends on the usage
/// mode and is checked when the interpreter is built, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpreterDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_mode: Option<UsageMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `DEPICT_`)
/// 3. Workspace-local config (`.depict/config.toml`)
/// 4. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&DepictConfig>,
) -> Result<DepictConfig, CoreError> {
    let mut figment = Figment::from(Serialized::defaults(DepictConfig::default()));

    if let Some(ws) = workspace {
        let ws_config = ws.join(".depict").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // DEPICT_LOGGING__LEVEL, DEPICT_INTERPRETER__USAGE_MODE, etc.
    figment = figment.merge(Env::prefixed("DEPICT_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    let config: DepictConfig = figment.extract().map_err(Box::new)?;
    tracing::debug!(
        level = %config.logging.level,
        usage_mode = ?config.interpreter.usage_mode,
        "Loaded configuration"
    );
    Ok(config)
}
