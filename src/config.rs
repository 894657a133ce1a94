//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `<config dir>/guidebook/config.toml`
//! 3. Environment variables: `GUIDEBOOK_*`
//!
//! The value external consumers care about is `namespace`, the mod identifier
//! embedded in every generated translation key. Example user config:
//!
//! ```toml
//! namespace = "mymod"
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_NAMESPACE, ENV_PREFIX};
use crate::error::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Mod namespace embedded in every translation key.
    pub namespace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user file → env).
    pub fn load() -> Result<Self, Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(Self::user_config_path()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Error::from)
    }

    /// User config path: `~/.config/guidebook/config.toml` or the platform
    /// equivalent.
    fn user_config_path() -> std::path::PathBuf {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME).join("config.toml"))
            .unwrap_or_default()
    }
}
