//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix for structured environment overrides
/// (`DENTAL_ASSIST_ASSISTANT__ENDPOINT`, `DENTAL_ASSIST_OUTPUT__COLOR`, ...).
pub const ENV_PREFIX: &str = "DENTAL_ASSIST_";

/// Shorthand variable for the assistant endpoint.
pub const ENDPOINT_ENV_VAR: &str = "DIFY_URL";

const PROJECT_FILES: [&str; 2] = ["dental-assist.toml", ".dental-assist.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DENTAL_ASSIST_*` environment variables, then `DIFY_URL`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./dental-assist.toml` or `./.dental-assist.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/dental-assist/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load defaults plus environment overrides only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(
                Env::raw()
                    .only(&[ENDPOINT_ENV_VAR])
                    .map(|_| "assistant.endpoint".into()),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/dental-assist/config.toml if set,
    /// otherwise falls back to ~/.config/dental-assist/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dental-assist").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}* / {}", ENV_PREFIX, ENDPOINT_ENV_VAR);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./dental-assist.toml or ./.dental-assist.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
