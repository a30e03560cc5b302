//! Settings for the django-compat crates.
//!
//! This module provides the [`Settings`] struct and [`LazySettings`], a
//! globally-accessible, configure-once settings instance. The design mirrors
//! Django's `django.conf.settings` with sensible defaults; redirect-style
//! settings hold destination values that the URL resolver understands
//! (a path, a full URL, or a view name).

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{CompatError, CompatResult};

/// The complete set of compatibility-layer settings.
///
/// Any field omitted from a loaded configuration file keeps its default.
///
/// # Examples
///
/// ```
/// use django_compat_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.login_url, "/accounts/login/");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// Destination for unauthenticated users: a path, URL, or view name.
    pub login_url: String,
    /// Destination after a successful login: a path, URL, or view name.
    pub login_redirect_url: String,
    /// Destination after logout: a path, URL, or view name.
    pub logout_redirect_url: String,
    /// Additional settings not modeled as fields.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            login_url: "/accounts/login/".to_string(),
            login_redirect_url: "/accounts/profile/".to_string(),
            logout_redirect_url: "/".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML string, keeping defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`CompatError::ImproperlyConfigured`] if the TOML is malformed.
    pub fn from_toml_str(toml_str: &str) -> CompatResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| CompatError::ImproperlyConfigured(format!("invalid settings TOML: {e}")))
    }

    /// Applies environment variable overrides on top of these settings.
    ///
    /// Recognized variables: `DJANGO_DEBUG`, `DJANGO_LOG_LEVEL`,
    /// `DJANGO_LOGIN_URL`, `DJANGO_LOGIN_REDIRECT_URL`,
    /// `DJANGO_LOGOUT_REDIRECT_URL`.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(debug) = std::env::var("DJANGO_DEBUG") {
            self.debug = matches!(debug.to_lowercase().as_str(), "1" | "true" | "yes");
            tracing::debug!(debug = self.debug, "DJANGO_DEBUG override applied");
        }
        if let Ok(level) = std::env::var("DJANGO_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Ok(url) = std::env::var("DJANGO_LOGIN_URL") {
            self.login_url = url;
        }
        if let Ok(url) = std::env::var("DJANGO_LOGIN_REDIRECT_URL") {
            self.login_redirect_url = url;
        }
        if let Ok(url) = std::env::var("DJANGO_LOGOUT_REDIRECT_URL") {
            self.logout_redirect_url = url;
        }
        self
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
///
/// # Panics
///
/// [`get`](LazySettings::get) panics if settings have not been configured.
/// [`configure`](LazySettings::configure) panics if called more than once.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
///
/// Call `SETTINGS.configure(settings)` once at application startup, then
/// access settings via `SETTINGS.get()` anywhere in the compatibility layer.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.login_url, "/accounts/login/");
        assert_eq!(s.login_redirect_url, "/accounts/profile/");
        assert_eq!(s.logout_redirect_url, "/");
        assert!(s.extra.is_empty());
    }

    #[test]
    fn test_from_toml_str_partial() {
        let s = Settings::from_toml_str(
            r#"
            debug = false
            login_url = "login"
            "#,
        )
        .unwrap();
        assert!(!s.debug);
        assert_eq!(s.login_url, "login");
        // Omitted fields keep their defaults.
        assert_eq!(s.log_level, "info");
        assert_eq!(s.logout_redirect_url, "/");
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let err = Settings::from_toml_str("debug = [").unwrap_err();
        assert!(matches!(err, CompatError::ImproperlyConfigured(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut s = Settings::default();
        s.login_url = "accounts:login".to_string();
        let serialized = toml::to_string(&s).unwrap();
        let restored = Settings::from_toml_str(&serialized).unwrap();
        assert_eq!(restored.login_url, "accounts:login");
        assert_eq!(restored.debug, s.debug);
    }

    #[test]
    fn test_lazy_settings_configure_and_get() {
        let lazy = LazySettings::new();
        assert!(!lazy.is_configured());
        lazy.configure(Settings::default());
        assert!(lazy.is_configured());
        assert!(lazy.get().debug);
    }

    #[test]
    #[should_panic(expected = "already been configured")]
    fn test_lazy_settings_double_configure_panics() {
        let lazy = LazySettings::new();
        lazy.configure(Settings::default());
        lazy.configure(Settings::default());
    }

    #[test]
    #[should_panic(expected = "have not been configured")]
    fn test_lazy_settings_get_unconfigured_panics() {
        let lazy = LazySettings::new();
        let _ = lazy.get();
    }
}
