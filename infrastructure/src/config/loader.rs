//! Configuration file loader with multi-source merging

use super::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file name
const PROJECT_CONFIG: &str = "devtype.toml";

/// Prefix for environment overrides (`DEVTYPE_TIMEOUTS__PROBE_SECS=3`)
const ENV_PREFIX: &str = "DEVTYPE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DEVTYPE_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./devtype.toml`
    /// 4. Global: `~/.config/devtype/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load and reject configurations the pipeline cannot run with
    pub fn load_validated(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let config = Self::load(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/devtype/config.toml` on Linux and the
    /// platform equivalent elsewhere.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("devtype").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_CONFIG);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValidationError;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.providers.len(), 2);
        assert_eq!(config.timeouts.request_secs, 25);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("devtype"));
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        // Jail serializes tests that touch the working directory and env
        Jail::expect_with(|_jail| {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(
                file,
                r#"
[timeouts]
probe_secs = 2

[[providers]]
name = "Local"
endpoint = "http://localhost:8080/v1/chat/completions"
protocol = "chat_completions"
"#
            )
            .unwrap();

            let config = ConfigLoader::load(Some(&file.path().to_path_buf())).map_err(|e| *e)?;
            assert_eq!(config.timeouts.probe_secs, 2);
            assert_eq!(config.timeouts.request_secs, 25);
            assert_eq!(config.providers.len(), 1);
            assert_eq!(config.providers[0].name, "Local");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                PROJECT_CONFIG,
                r#"
[timeouts]
probe_secs = 4
request_secs = 15
"#,
            )?;
            jail.set_env("DEVTYPE_TIMEOUTS__REQUEST_SECS", "40");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.timeouts.probe_secs, 4);
            assert_eq!(config.timeouts.request_secs, 40);
            Ok(())
        });
    }

    #[test]
    fn test_load_validated_rejects_zero_timeout() {
        Jail::expect_with(|jail| {
            jail.set_env("DEVTYPE_TIMEOUTS__PROBE_SECS", "0");

            match ConfigLoader::load_validated(None) {
                Err(ConfigError::Invalid(error)) => {
                    assert_eq!(error, ConfigValidationError::ZeroTimeout("probe_secs"));
                }
                other => panic!("expected validation error, got {:?}", other),
            }
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        Jail::expect_with(|_jail| {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "[timeouts]\nprobe_secs = \"soon\"").unwrap();

            let error = ConfigLoader::load_validated(Some(&file.path().to_path_buf())).unwrap_err();
            assert!(matches!(error, ConfigError::Load(_)));
            Ok(())
        });
    }
}
