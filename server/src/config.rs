//! Site configuration parsed from environment variables.
//!
//! The deployment knobs are deliberately few: a listen port and the base
//! path the site is served under. The base path replaces the old static
//! bundler's `base` field and is used both when mounting the shell router
//! and when generating asset URLs.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_PATH: &str = "/SmartDine.AI";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub base_path: String,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `BASE_PATH`: deployment path prefix, default `/SmartDine.AI`;
    ///   `/` (or empty) serves the site at the root
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is present but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let base_path = normalize_base_path(
            &std::env::var("BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_owned()),
        );

        Ok(Self { port, base_path })
    }

    /// `true` when the site is mounted at the root rather than a prefix.
    #[must_use]
    pub fn at_root(&self) -> bool {
        self.base_path == "/"
    }
}

/// Normalize a deployment base path to `/`-prefixed, no-trailing-slash form.
///
/// The historical deploy configuration spelled the prefix bare
/// (`SmartDine.AI`); accept that spelling as well as `/SmartDine.AI/`.
#[must_use]
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    format!("/{trimmed}")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
