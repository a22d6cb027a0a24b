//! Site configuration baked in at build time.
//!
//! Overrides are read with `option_env!` when the WASM bundle is compiled:
//! - `STUDIO_FORM_ENDPOINT`: contact form relay URL
//! - `STUDIO_SITE_URL`: canonical origin used for SEO tags
//! - `STUDIO_THEME_KEY`: `localStorage` key for the theme preference
//! - `STUDIO_THEME_GRACE_MS`: delay before the pending theme flag clears

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SITE_NAME: &str = "Fieldwork Studio";
pub const DEFAULT_SITE_URL: &str = "https://fieldwork.studio";
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/fieldwork-contact";
pub const DEFAULT_THEME_GRACE_MS: u32 = 50;
pub const DEFAULT_TOAST_TTL_MS: u32 = 4_000;

/// Error building a [`SiteConfig`] from raw override values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("STUDIO_THEME_KEY must not be empty")]
    EmptyThemeKey,
}

/// Typed site configuration provided through context from the app root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_url: String,
    pub form_endpoint: String,
    pub theme_storage_key: String,
    pub theme_grace_ms: u32,
    pub toast_ttl_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            site_url: DEFAULT_SITE_URL.to_owned(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_owned(),
            theme_storage_key: appearance::DEFAULT_STORAGE_KEY.to_owned(),
            theme_grace_ms: DEFAULT_THEME_GRACE_MS,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

/// Raw override values, as captured from the build environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides<'a> {
    pub form_endpoint: Option<&'a str>,
    pub site_url: Option<&'a str>,
    pub theme_key: Option<&'a str>,
    pub theme_grace_ms: Option<&'a str>,
}

impl SiteConfig {
    /// Overrides compiled into this build.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_overrides`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_overrides(ConfigOverrides {
            form_endpoint: option_env!("STUDIO_FORM_ENDPOINT"),
            site_url: option_env!("STUDIO_SITE_URL"),
            theme_key: option_env!("STUDIO_THEME_KEY"),
            theme_grace_ms: option_env!("STUDIO_THEME_GRACE_MS"),
        })
    }

    /// Build config from raw overrides; absent values take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-http(s) URL or an empty theme key. An
    /// unparsable grace delay falls back to the default instead.
    pub fn from_overrides(raw: ConfigOverrides<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let form_endpoint = match raw.form_endpoint {
            Some(v) => parse_url("STUDIO_FORM_ENDPOINT", v)?,
            None => defaults.form_endpoint,
        };
        let site_url = match raw.site_url {
            Some(v) => parse_url("STUDIO_SITE_URL", v)?,
            None => defaults.site_url,
        };
        let theme_storage_key = match raw.theme_key.map(str::trim) {
            Some("") => return Err(ConfigError::EmptyThemeKey),
            Some(key) => key.to_owned(),
            None => defaults.theme_storage_key,
        };
        let theme_grace_ms = parse_millis(raw.theme_grace_ms, DEFAULT_THEME_GRACE_MS);

        Ok(Self {
            site_name: defaults.site_name,
            site_url,
            form_endpoint,
            theme_storage_key,
            theme_grace_ms,
            toast_ttl_ms: defaults.toast_ttl_ms,
        })
    }

    /// Build-time config, or defaults with a warning if overrides are invalid.
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid site config override, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Absolute URL for an in-page path such as `/` or `/#contact`.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let valid = ["https://", "http://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
    if valid {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidUrl { var, value: raw.to_owned() })
    }
}

fn parse_millis(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(default)
}
