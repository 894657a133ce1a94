//! Application-wide constants

/// Fixed subsystem tag that starts every guidebook translation key
pub const KEY_ROOT: &str = "guidebook";

/// Path segment between the namespace and the category id in a key
pub const CATEGORY_SEGMENT: &str = "category";

/// Final key segment for a category's display name
pub const NAME_SUFFIX: &str = "name";

/// Final key segment for a category's description
pub const DESCRIPTION_SUFFIX: &str = "description";

/// Mod namespace used when no configuration is present
pub const DEFAULT_NAMESPACE: &str = "examplemod";

/// Prefix for environment variable configuration overrides
pub const ENV_PREFIX: &str = "GUIDEBOOK_";

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "guidebook";
