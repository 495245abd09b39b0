use serde::Deserialize;

use crate::error::ShellError;

/// Shell settings baked into the bundle from `shell.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Heading shown above the menu entries.
    pub menu_title: String,
    /// View selected at startup. Falls back to the first menu entry when unset
    /// or unknown.
    pub default_view: Option<String>,
    /// `tracing_subscriber::EnvFilter` directives, e.g. `"info,menu_shell=debug"`.
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu_title: "Menu".to_string(),
            default_view: Some("home".to_string()),
            log_filter: "info".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, ShellError> {
        serde_json::from_str(raw).map_err(|e| ShellError::Config(e.to_string()))
    }

    /// The configuration embedded at build time, or the defaults if it does
    /// not parse.
    pub fn bundled() -> (Self, Option<ShellError>) {
        match Self::from_json(include_str!("../shell.json")) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
