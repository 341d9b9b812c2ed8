//! # Client Configuration
//!
//! Settings the native shell may inject before the client starts, as a JSON
//! string on `window.__MANIFOLD_CONFIG__`. Every field has a default, so the
//! shell only needs to provide what it overrides.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the native shell uses to hand configuration to the client
pub const CONFIG_GLOBAL: &str = "__MANIFOLD_CONFIG__";

/// How long the modal exit animation runs before the modal unmounts
pub const MODAL_TRANSITION_MS: u32 = 200;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_base_url: String,
    pub modal_transition_ms: u32,
    /// Cookie whose presence means the user is signed in
    pub session_cookie: String,
    pub login_path: String,
    pub home_path: String,
    /// Paths reachable without a session
    pub public_paths: Vec<String>,
    /// Id of the signed-in user, known to the shell from the login exchange.
    /// The session cookie itself is opaque and never carries it.
    pub current_user_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            modal_transition_ms: MODAL_TRANSITION_MS,
            session_cookie: "id".to_string(),
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
            public_paths: vec!["/login".to_string(), "/signup".to_string(), "/verify".to_string()],
            current_user_id: None,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the shell-provided configuration, or defaults when there is none
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };

        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);

        match value.as_string() {
            Some(json) => Self::from_json(&json),
            None => {
                log::info!(target: "config", "no {} provided, using defaults", CONFIG_GLOBAL);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("apiBaseUrl must not be empty".to_string()));
        }
        if !self.login_path.starts_with('/') || !self.home_path.starts_with('/') {
            return Err(ConfigError::Invalid("loginPath and homePath must be absolute".to_string()));
        }
        if self.session_cookie.is_empty() {
            return Err(ConfigError::Invalid("sessionCookie must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_paths.iter().any(|public| public == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.modal_transition_ms, 200);
        assert_eq!(config.session_cookie, "id");
        assert!(config.is_public_path("/signup"));
        assert!(!config.is_public_path("/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"apiBaseUrl": "https://manifold.example", "modalTransitionMs": 350}"#).unwrap();
        assert_eq!(config.api_base_url, "https://manifold.example");
        assert_eq!(config.modal_transition_ms, 350);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.current_user_id, None);
    }

    #[test]
    fn test_current_user_id_from_shell() {
        let config = ClientConfig::from_json(r#"{"currentUserId": "0b9c6c7e-3f51-4a43-9a3c-2b8fb1b0d6a1"}"#).unwrap();
        assert_eq!(
            config.current_user_id.as_deref(),
            Some("0b9c6c7e-3f51-4a43-9a3c-2b8fb1b0d6a1")
        );
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(ClientConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            ClientConfig::from_json(r#"{"apiBaseUrl": "  "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ClientConfig::from_json(r#"{"loginPath": "login"}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
