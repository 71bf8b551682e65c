use crate::error::{Result, XbeanError};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// Name of the configuration file searched for in the working directory
/// and its ancestors.
pub const CONFIG_FILE_NAME: &str = "xbeangen.toml";

/// Namespace-independent settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GeneralConfig {
    /// Namespace given to marked types that do not name one.
    #[serde(default)]
    pub default_namespace: String,
}

/// Where descriptors come from and where artifacts go.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// A descriptor JSON file, or a directory scanned for `*.json` files.
    pub descriptors: String,
    /// Path of the XSD artifact; the HTML reference is written beside it.
    pub destination: String,
    /// Root under which `META-INF/services/...` discovery files are written.
    #[serde(default = "default_meta_inf_dir")]
    pub meta_inf_dir: String,
}

fn default_meta_inf_dir() -> String {
    "target/classes/".to_string()
}

/// Extra value types that can be written as attribute strings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct EditorsConfig {
    #[serde(default)]
    pub types: Vec<String>,
}

/// Root configuration, read from `xbeangen.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct XbeanConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    pub schema: SchemaConfig,
    #[serde(default)]
    pub editors: EditorsConfig,
}

impl XbeanConfig {
    /// Load configuration by searching for `xbeangen.toml` in the current
    /// directory and its ancestors.
    pub fn new() -> Result<XbeanConfig> {
        info!("Loading xbeangen configuration");
        let config_path = Self::find_config_file(&env::current_dir()?)?;
        info!("Found configuration file at: {:?}", config_path);
        Self::from_path(&config_path)
    }

    /// Load configuration from an explicit file. Relative paths inside it
    /// are resolved against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<XbeanConfig> {
        let path = path.as_ref();
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file {:?}: {}", path, e);
            XbeanError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        let base_dir = path.parent().unwrap_or(Path::new("."));
        Self::from_toml_str(&contents, base_dir)
    }

    /// Parse configuration text, substituting environment variables and
    /// resolving relative paths against `base_dir`.
    pub fn from_toml_str(contents: &str, base_dir: &Path) -> Result<XbeanConfig> {
        let mut config: XbeanConfig = toml::from_str(contents)
            .inspect_err(|e| error!("Failed to parse TOML configuration: {}", e))?;
        debug!("Successfully parsed TOML configuration");

        config.general.default_namespace =
            Self::substitute_env_vars(&config.general.default_namespace)?;
        config.schema.descriptors = Self::resolve_path(
            base_dir,
            &Self::substitute_env_vars(&config.schema.descriptors)?,
        );
        config.schema.destination = Self::resolve_path(
            base_dir,
            &Self::substitute_env_vars(&config.schema.destination)?,
        );
        config.schema.meta_inf_dir = Self::resolve_path(
            base_dir,
            &Self::substitute_env_vars(&config.schema.meta_inf_dir)?,
        );

        debug!(
            "Default namespace: {:?}, descriptors: {}, destination: {}, meta-inf: {}, extra editors: {}",
            config.general.default_namespace,
            config.schema.descriptors,
            config.schema.destination,
            config.schema.meta_inf_dir,
            config.editors.types.len()
        );
        Ok(config)
    }

    /// Searches for `xbeangen.toml` starting from `start_dir` and traversing
    /// up to the root.
    pub fn find_config_file(start_dir: &Path) -> Result<PathBuf> {
        debug!("Starting config file search from: {:?}", start_dir);

        for path in start_dir.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.exists() {
                return Ok(config_path);
            }
        }

        error!("Configuration file '{}' not found in any parent directory.", CONFIG_FILE_NAME);
        Err(XbeanError::ConfigNotFound {
            file_name: CONFIG_FILE_NAME.to_string(),
            search_start: start_dir.to_path_buf(),
        })
    }

    fn resolve_path(base_dir: &Path, value: &str) -> String {
        let path = Path::new(value);
        if path.is_absolute() || base_dir.as_os_str().is_empty() {
            value.to_string()
        } else {
            base_dir.join(path).to_string_lossy().into_owned()
        }
    }

    /// Substitute environment variables in config strings
    /// Supports ${VAR_NAME:-default} syntax
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(XbeanError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
