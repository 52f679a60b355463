use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::ManifestKind;
use crate::scaffold::DEFAULT_MODULE_NAME;
use crate::substitute::DEFAULT_SUBJECT;

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = "pkgversion.toml";

/// Environment variable pointing at a configuration file
pub const CONFIG_ENV_VAR: &str = "PKG_VERSION_CONFIG";

/// Represents the complete configuration for pkg-version.
///
/// Every section is optional; command-line flags take precedence over it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub copy: CopyConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub typescript: TypeScriptConfig,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_module_name() -> String {
    DEFAULT_MODULE_NAME.to_string()
}

/// Settings for `copyto`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CopyConfig {
    /// Placeholder token replaced in target files
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        CopyConfig {
            subject: default_subject(),
        }
    }
}

/// Which manifest holds the version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ManifestConfig {
    #[serde(default, rename = "type")]
    pub kind: ManifestKind,
}

/// Settings for `create-ts`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TypeScriptConfig {
    /// File name used when the target is a directory
    #[serde(default = "default_module_name")]
    pub file_name: String,

    #[serde(default)]
    pub single_quotes: bool,

    #[serde(default)]
    pub semi: bool,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        TypeScriptConfig {
            file_name: default_module_name(),
            single_quotes: false,
            semi: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `PKG_VERSION_CONFIG` environment variable
/// 3. `pkgversion.toml` in `working_dir`
/// 4. `.pkgversion.toml` in the user config directory
/// 5. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `working_dir` - Directory searched for `pkgversion.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was selected but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let Some(path) = find_config(config_path, working_dir) else {
        return Ok(Config::default());
    };

    tracing::debug!(config = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn find_config(config_path: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(working_dir.join(path));
    }

    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(working_dir.join(path));
    }

    let local = working_dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}
