//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cloude/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::sample_data::{CANNED_RESPONSES, SUGGESTED_PROMPTS};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CloudeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub replies: RepliesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub assistant_name: Option<String>,
    pub user_name: Option<String>,
    pub reply_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RepliesConfig {
    pub responses: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub suggestions: Option<Vec<String>>,
    pub sidebar_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ASSISTANT_NAME: &str = "Cloude";
pub const DEFAULT_USER_NAME: &str = "User";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 28;
const MIN_SIDEBAR_WIDTH: u16 = 18;

pub const ENV_ASSISTANT_NAME: &str = "CLOUDE_ASSISTANT_NAME";
pub const ENV_REPLY_DELAY_MS: &str = "CLOUDE_REPLY_DELAY_MS";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub assistant_name: String,
    pub user_name: String,
    pub reply_delay: Duration,
    pub seed: Option<u64>,
    pub responses: Vec<String>,
    pub suggestions: Vec<String>,
    pub sidebar_width: u16,
}

/// Values supplied on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub reply_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cloude/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cloude").join("config.toml"))
}

/// Load config from `~/.cloude/config.toml`, or from `explicit` when given.
///
/// A missing default file is generated (commented out) and yields
/// `CloudeConfig::default()`. A missing explicit file is an I/O error.
pub fn load_config(explicit: Option<&Path>) -> Result<CloudeConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CloudeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CloudeConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<CloudeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CloudeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Cloude Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# assistant_name = "Cloude"          # Or set CLOUDE_ASSISTANT_NAME env var
# user_name = "User"
# reply_delay_ms = 1500              # Or set CLOUDE_REPLY_DELAY_MS env var
# seed = 42                          # Fixed seed for reproducible replies

# [replies]
# responses = [
#     "Great question! Here's how I would approach this problem...",
# ]

# [ui]
# sidebar_width = 28
# suggestions = [
#     "Help me write a professional email",
#     "Explain a complex topic simply",
# ]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CloudeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &CloudeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Assistant name: env → config → default
    let assistant_name = env(ENV_ASSISTANT_NAME)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| config.general.assistant_name.clone())
        .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string());

    // Reply delay: CLI → env → config → default
    let reply_delay_ms = cli
        .reply_delay_ms
        .or_else(|| env(ENV_REPLY_DELAY_MS).and_then(|s| parse_env_delay(&s)))
        .or(config.general.reply_delay_ms)
        .unwrap_or(DEFAULT_REPLY_DELAY_MS);

    ResolvedConfig {
        assistant_name,
        user_name: config
            .general
            .user_name
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        reply_delay: Duration::from_millis(reply_delay_ms),
        seed: cli.seed.or(config.general.seed),
        responses: non_empty_or(
            config.replies.responses.as_deref(),
            CANNED_RESPONSES,
            "responses",
        ),
        suggestions: non_empty_or(
            config.ui.suggestions.as_deref(),
            SUGGESTED_PROMPTS,
            "suggestions",
        ),
        sidebar_width: config
            .ui
            .sidebar_width
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
            .max(MIN_SIDEBAR_WIDTH),
    }
}

fn parse_env_delay(raw: &str) -> Option<u64> {
    match raw.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", ENV_REPLY_DELAY_MS, raw, e);
            None
        }
    }
}

/// Uses the configured list unless it is missing or has no usable entries.
fn non_empty_or(configured: Option<&[String]>, defaults: &[&str], what: &str) -> Vec<String> {
    let entries: Vec<String> = configured
        .unwrap_or_default()
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();

    if entries.is_empty() {
        if configured.is_some() {
            warn!("Configured {} list is empty, falling back to defaults", what);
        }
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CloudeConfig::default();
        assert!(config.general.assistant_name.is_none());
        assert!(config.replies.responses.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CloudeConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.user_name, DEFAULT_USER_NAME);
        assert_eq!(resolved.sidebar_width, DEFAULT_SIDEBAR_WIDTH);
        assert_eq!(resolved.responses.len(), CANNED_RESPONSES.len());
        assert_eq!(resolved.suggestions[1], "Explain a complex topic simply");
        assert!(resolved.seed.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CloudeConfig {
            general: GeneralConfig {
                user_name: Some("Ada".to_string()),
                seed: Some(7),
                ..Default::default()
            },
            replies: RepliesConfig {
                responses: Some(vec!["Only answer".to_string()]),
            },
            ui: UiConfig {
                suggestions: Some(vec!["Plan a trip".to_string()]),
                sidebar_width: Some(32),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.user_name, "Ada");
        assert_eq!(resolved.seed, Some(7));
        assert_eq!(resolved.responses, vec!["Only answer".to_string()]);
        assert_eq!(resolved.suggestions, vec!["Plan a trip".to_string()]);
        assert_eq!(resolved.sidebar_width, 32);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = CloudeConfig {
            general: GeneralConfig {
                reply_delay_ms: Some(3000),
                seed: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            reply_delay_ms: Some(10),
            seed: Some(99),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.reply_delay, Duration::from_millis(10));
        assert_eq!(resolved.seed, Some(99));
    }

    #[test]
    fn test_empty_response_list_falls_back() {
        let config = CloudeConfig {
            replies: RepliesConfig {
                responses: Some(vec!["   ".to_string()]),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.responses.len(), CANNED_RESPONSES.len());
    }

    #[test]
    fn test_sidebar_width_is_clamped() {
        let config = CloudeConfig {
            ui: UiConfig {
                sidebar_width: Some(4),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.sidebar_width, MIN_SIDEBAR_WIDTH);
    }

    fn fake_env(key: &str) -> Option<String> {
        match key {
            ENV_ASSISTANT_NAME => Some("Envoy".to_string()),
            ENV_REPLY_DELAY_MS => Some("250".to_string()),
            _ => None,
        }
    }

    fn file_config() -> CloudeConfig {
        CloudeConfig {
            general: GeneralConfig {
                assistant_name: Some("FromFile".to_string()),
                reply_delay_ms: Some(3000),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_env_beats_file() {
        let resolved = resolve_with_env(&file_config(), &CliOverrides::default(), fake_env);
        assert_eq!(resolved.assistant_name, "Envoy");
        assert_eq!(resolved.reply_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_cli_beats_env() {
        let cli = CliOverrides {
            reply_delay_ms: Some(10),
            seed: None,
        };
        let resolved = resolve_with_env(&file_config(), &cli, fake_env);
        assert_eq!(resolved.reply_delay, Duration::from_millis(10));
        assert_eq!(resolved.assistant_name, "Envoy");
    }

    #[test]
    fn test_unusable_env_falls_through_to_file() {
        let env = |key: &str| match key {
            ENV_ASSISTANT_NAME => Some("   ".to_string()),
            ENV_REPLY_DELAY_MS => Some("soon".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&file_config(), &CliOverrides::default(), env);
        assert_eq!(resolved.assistant_name, "FromFile");
        assert_eq!(resolved.reply_delay, Duration::from_millis(3000));
    }

    #[test]
    fn test_no_env_uses_file() {
        let resolved = resolve_with_env(&file_config(), &CliOverrides::default(), |_| None);
        assert_eq!(resolved.assistant_name, "FromFile");
        assert_eq!(resolved.reply_delay, Duration::from_millis(3000));
    }

    #[test]
    fn test_parse_env_delay() {
        assert_eq!(parse_env_delay(" 250 "), Some(250));
        assert_eq!(parse_env_delay("soon"), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
assistant_name = "Helper"
reply_delay_ms = 500
seed = 3

[replies]
responses = ["One", "Two"]

[ui]
sidebar_width = 30
"#;
        let config: CloudeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.assistant_name.as_deref(), Some("Helper"));
        assert_eq!(config.general.reply_delay_ms, Some(500));
        assert_eq!(config.replies.responses.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.ui.sidebar_width, Some(30));
        assert!(config.ui.suggestions.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
user_name = "Grace"
"#;
        let config: CloudeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.user_name.as_deref(), Some("Grace"));
        assert!(config.general.reply_delay_ms.is_none());
        assert!(config.replies.responses.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let result = load_config(Some(Path::new("/definitely/not/here/cloude.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
