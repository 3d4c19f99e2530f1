//! Layered configuration loading.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
pub const CONFIG_DIR_ENV: &str = "PAGER_CONFIG_DIR";

/// Environment variable for a single configuration file
pub const CONFIG_FILE_ENV: &str = "PAGER_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PAGER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader
///
/// Sources, lowest priority first:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml`
/// 3. `local.toml`
/// 4. `PAGER_*` environment variables, `__` separating nested keys
///
/// When a single configuration file is selected the three files are replaced
/// by that file; environment variables still apply on top.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `PAGER_CONFIG_DIR`, `PAGER_CONFIG_FILE` and
    /// `PAGER_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `PAGER_CONFIG_DIR` and `PAGER_CONFIG_FILE`
    /// are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(format!(
                "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                 Use {CONFIG_DIR_ENV} for layered configuration or \
                 {CONFIG_FILE_ENV} for a single configuration file."
            )));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load a single file instead of the layered directory
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load, deserialize and validate the settings.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize configuration: {e}")))?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            config_file = ?self.config_file,
            config_dir = %self.config_dir.display(),
            "configuration loaded"
        );

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // PAGER_PAGINATION__DEFAULTS__PAGE_SIZE -> pagination.defaults.page_size
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, true)?;

        let env_path = self.config_dir.join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let name = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!("Configuration path is not valid UTF-8: {}", path.display()))
        })?;

        Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
    }

    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process environment run one at a time
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    const DEFAULT_TOML: &str = r#"
[application]
name = "pager-test"

[pagination.globals]
auto_register = true

[pagination.paginator]
template = "pagination/sliding.html"

[pagination.defaults]
page_size = 10
range_size = 5
page_sizes = [10, 20, 50]

[logger]
level = "info"
format = "full"
"#;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores touched environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "PAGER_PAGINATION__DEFAULTS__PAGE_SIZE",
                "PAGER_PAGINATION__GLOBALS__AUTO_REGISTER",
            ] {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_config_loader_new_default() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();

        let loader = ConfigLoader::new().unwrap();
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains(CONFIG_DIR_ENV));
                assert!(msg.contains(CONFIG_FILE_ENV));
            }
            other => panic!("Expected MutualExclusivityError, got {other:?}"),
        }
    }

    #[test]
    fn test_config_loader_environment_from_env() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(AppEnvironment::ENV_VAR, "prod");

        let loader = ConfigLoader::new().unwrap();
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        match ConfigLoader::new().unwrap().load() {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.application.name, "pager-test");
        assert_eq!(settings.pagination.defaults.page_sizes, vec![10, 20, 50]);
        assert_eq!(settings.pagination.counter.template, "pagination/counter.html");
    }

    #[test]
    fn test_layered_precedence() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("test.toml", "[pagination.defaults]\npage_size = 20\nrange_size = 7\n"),
            ("local.toml", "[pagination.defaults]\nrange_size = 9\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "test");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.pagination.defaults.page_size, 20);
        assert_eq!(settings.pagination.defaults.range_size, 9);
    }

    #[test]
    fn test_env_var_overrides() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("PAGER_PAGINATION__DEFAULTS__PAGE_SIZE", "50");
        env.set("PAGER_PAGINATION__GLOBALS__AUTO_REGISTER", "false");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.pagination.defaults.page_size, 50);
        assert!(!settings.pagination.globals.auto_register);
    }

    #[test]
    fn test_single_file_mode() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("custom.toml", "[pagination.defaults]\nrange_size = 11\n")]);

        let settings = ConfigLoader::new()
            .unwrap()
            .with_config_file(temp_dir.path().join("custom.toml"))
            .load()
            .unwrap();
        assert_eq!(settings.pagination.defaults.range_size, 11);
        assert_eq!(settings.pagination.defaults.page_size, 10);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("bad.toml", "[pagination.defaults]\nrange_size = 2\n")]);

        let result = ConfigLoader::new()
            .unwrap()
            .with_config_file(temp_dir.path().join("bad.toml"))
            .load();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "pagination.defaults.range_size"
        ));
    }
}
