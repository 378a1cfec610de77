//! Configuration management
//!
//! Settings are resolved in the following order (later wins):
//! 1. Defaults
//! 2. `mcp-server-syncthing.toml` (or an explicit path)
//! 3. Environment variables (`SYNCTHING_API_KEY`, `SYNCTHING_API_URL`)
//!
//! `${VAR_NAME}` references inside the TOML file are expanded from the
//! environment before parsing.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::Error;

/// Environment variable holding the Syncthing API key
pub const API_KEY_ENV: &str = "SYNCTHING_API_KEY";

/// Environment variable holding the Syncthing REST base URL
pub const API_URL_ENV: &str = "SYNCTHING_API_URL";

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mcp-server-syncthing.toml";

/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8384";

/// Connection settings for the Syncthing REST API
///
/// Loaded once at startup and handed to the client constructor.
#[derive(Clone, PartialEq, Eq)]
pub struct SyncthingConfig {
    /// Value sent in the `X-API-Key` header
    pub api_key: String,

    /// Base URL without trailing slash, e.g. `http://localhost:8384`
    pub api_url: String,
}

impl fmt::Debug for SyncthingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncthingConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    syncthing: Option<TomlSyncthingSection>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlSyncthingSection {
    api_key: Option<String>,
    api_url: Option<String>,
}

/// Partially resolved settings, before validation
#[derive(Debug, Default)]
struct PartialConfig {
    api_key: Option<String>,
    api_url: Option<String>,
}

impl SyncthingConfig {
    /// Build a configuration directly, normalizing the base URL
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> crate::Result<Self> {
        PartialConfig {
            api_key: Some(api_key.into()),
            api_url: Some(api_url.into()),
        }
        .finish()
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Load configuration from a variable lookup function
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut partial = PartialConfig::default();
        partial.apply_overrides(&lookup);
        partial.finish()
    }

    /// Load a TOML configuration file, then apply environment overrides
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        Self::from_toml_file_with(path, env_lookup)
    }

    fn from_toml_file_with<P, F>(path: P, lookup: F) -> crate::Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = expand_env_vars(&content, &lookup);

        let parsed: TomlConfig = toml::from_str(&expanded)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        let section = parsed.syncthing.unwrap_or_default();
        let mut partial = PartialConfig {
            api_key: section.api_key,
            api_url: section.api_url,
        };
        partial.apply_overrides(&lookup);
        partial.finish()
    }

    /// Load configuration from the given file, the default file, or the environment
    ///
    /// An explicit path must exist. Without one, `mcp-server-syncthing.toml`
    /// in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_toml_file(DEFAULT_CONFIG_FILE)
            }
            None => Self::from_env(),
        }
    }
}

impl PartialConfig {
    /// Environment values win over file values; empty values are ignored
    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.api_url = Some(url);
        }
    }

    fn finish(self) -> crate::Result<SyncthingConfig> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!("{} environment variable is not set", API_KEY_ENV))
            })?;

        let api_url = self
            .api_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(SyncthingConfig {
            api_key,
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        })
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Replace `${VAR_NAME}` with the variable's value
///
/// Unknown variables expand to an empty string; an unterminated `${`
/// is kept verbatim.
fn expand_env_vars<F>(value: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var_name = &after[..end];
                if let Some(env_value) = lookup(var_name) {
                    result.push_str(&env_value);
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = SyncthingConfig::from_lookup(lookup_from(&[]));
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("SYNCTHING_API_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_api_key_is_config_error() {
        let result = SyncthingConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_api_url() {
        let config = SyncthingConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_url, "http://localhost:8384");
    }

    #[test]
    fn test_custom_api_url_trailing_slash_trimmed() {
        let config = SyncthingConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "secret"),
            (API_URL_ENV, "https://nas.local:8384/"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://nas.local:8384");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SyncthingConfig::new("super-secret", DEFAULT_API_URL).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_toml_file_with_env_expansion() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[syncthing]").unwrap();
        writeln!(file, "api_key = \"${{ST_KEY}}\"").unwrap();
        writeln!(file, "api_url = \"http://10.0.0.2:8384\"").unwrap();

        let config =
            SyncthingConfig::from_toml_file_with(file.path(), lookup_from(&[("ST_KEY", "from-env")]))
                .unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.api_url, "http://10.0.0.2:8384");
    }

    #[test]
    fn test_env_overrides_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[syncthing]").unwrap();
        writeln!(file, "api_key = \"file-key\"").unwrap();

        let config = SyncthingConfig::from_toml_file_with(
            file.path(),
            lookup_from(&[(API_KEY_ENV, "env-key"), (API_URL_ENV, "http://other:8384")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_url, "http://other:8384");
    }

    #[test]
    fn test_missing_toml_file_is_config_error() {
        let result = SyncthingConfig::from_toml_file_with(
            "/nonexistent/mcp-server-syncthing.toml",
            lookup_from(&[(API_KEY_ENV, "secret")]),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[syncthing").unwrap();

        let result = SyncthingConfig::from_toml_file_with(file.path(), lookup_from(&[]));
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to parse TOML")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_env_vars() {
        let lookup = lookup_from(&[("HOST", "nas")]);
        assert_eq!(expand_env_vars("http://${HOST}:8384", &lookup), "http://nas:8384");
        assert_eq!(expand_env_vars("${MISSING}x", &lookup), "x");
        assert_eq!(expand_env_vars("keep ${open", &lookup), "keep ${open");
        assert_eq!(expand_env_vars("no vars", &lookup), "no vars");
    }
}
