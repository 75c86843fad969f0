// Agent configuration
// Layered: built-in defaults < optional `drover.toml` < DROVER_* env vars.

use drover_core::{AppError, Result};
use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the executor layer
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AgentConfig {
    /// Environment variables shell children may inherit
    pub env_allowlist: Vec<String>,
    /// Timeout applied when a dispatch request carries none
    pub default_timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            env_allowlist: default_allowlist(),
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_allowlist() -> Vec<String> {
    ["PATH", "HOME", "USER"].map(String::from).to_vec()
}

impl AgentConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        Self::load_from(
            config::File::with_name("drover").required(false),
            env_source("DROVER"),
        )
    }

    fn load_from(
        file: config::File<config::FileSourceFile, config::FileFormat>,
        env: config::Environment,
    ) -> Result<Self> {
        let cfg = config::Config::builder()
            .set_default("env_allowlist", default_allowlist())
            .map_err(config_err)?
            .set_default("default_timeout_secs", DEFAULT_TIMEOUT_SECS)
            .map_err(config_err)?
            .add_source(file)
            .add_source(env)
            .build()
            .map_err(config_err)?;

        cfg.try_deserialize().map_err(config_err)
    }
}

fn env_source(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("env_allowlist")
}

fn config_err(e: config::ConfigError) -> AppError {
    AppError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test reads its own env prefix: the environment is process-global
    // and tests run in parallel.
    fn missing_file() -> config::File<config::FileSourceFile, config::FileFormat> {
        config::File::with_name("/nonexistent/drover").required(false)
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let cfg = AgentConfig::load_from(missing_file(), env_source("DROVER_UNSET")).unwrap();

        assert_eq!(cfg, AgentConfig::default());
        assert!(cfg.env_allowlist.contains(&"PATH".to_string()));
        assert_eq!(cfg.default_timeout_secs, 60);
    }

    #[test]
    fn env_vars_override_defaults() {
        std::env::set_var("DROVER_ENVTEST_DEFAULT_TIMEOUT_SECS", "7");
        std::env::set_var("DROVER_ENVTEST_ENV_ALLOWLIST", "PATH,LANG");

        let cfg = AgentConfig::load_from(missing_file(), env_source("DROVER_ENVTEST")).unwrap();

        assert_eq!(cfg.default_timeout_secs, 7);
        assert_eq!(cfg.env_allowlist, vec!["PATH".to_string(), "LANG".to_string()]);
    }

    #[test]
    fn file_overrides_defaults() {
        let path = std::env::temp_dir().join("drover_config_file_test.toml");
        std::fs::write(
            &path,
            "default_timeout_secs = 9\nenv_allowlist = [\"PATH\"]\n",
        )
        .unwrap();

        let cfg =
            AgentConfig::load_from(config::File::from(path.as_path()), env_source("DROVER_FILETEST"))
                .unwrap();

        assert_eq!(cfg.default_timeout_secs, 9);
        assert_eq!(cfg.env_allowlist, vec!["PATH".to_string()]);
    }

    #[test]
    fn env_vars_override_file() {
        let path = std::env::temp_dir().join("drover_config_layer_test.toml");
        std::fs::write(&path, "default_timeout_secs = 9\n").unwrap();
        std::env::set_var("DROVER_LAYERTEST_DEFAULT_TIMEOUT_SECS", "11");

        let cfg = AgentConfig::load_from(
            config::File::from(path.as_path()),
            env_source("DROVER_LAYERTEST"),
        )
        .unwrap();

        assert_eq!(cfg.default_timeout_secs, 11);
    }
}
