//! Translation key construction for the guidebook.
//!
//! Keys use dotted namespaces: `guidebook.<namespace>.category.<id>.name`.
//! Looking up user-facing text for a key is the localization subsystem's job;
//! this module only produces the key strings it consumes.

use serde::Serialize;

use crate::category::Category;
use crate::constants::{CATEGORY_SEGMENT, DESCRIPTION_SUFFIX, KEY_ROOT, NAME_SUFFIX};

/// Join the subsystem tag, mod namespace, and dotted path into a single key
pub fn translation_key(root: &str, namespace: &str, path: &str) -> String {
    format!("{root}.{namespace}.{path}")
}

/// The `.name` / `.description` key pair for one category
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TranslationKeys {
    pub name: String,
    pub description: String,
}

impl TranslationKeys {
    /// Derive both keys from the category's shared key prefix
    pub fn for_category(namespace: &str, category: Category) -> Self {
        let prefix = translation_key(
            KEY_ROOT,
            namespace,
            &format!("{CATEGORY_SEGMENT}.{}", category.id()),
        );
        Self {
            name: format!("{prefix}.{NAME_SUFFIX}"),
            description: format!("{prefix}.{DESCRIPTION_SUFFIX}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_root_namespace_and_path() {
        assert_eq!(
            translation_key("guidebook", "examplemod", "category.items"),
            "guidebook.examplemod.category.items"
        );
    }

    #[test]
    fn blocks_machines_key_pair() {
        let keys = TranslationKeys::for_category("examplemod", Category::BlocksMachines);
        assert_eq!(
            keys.name,
            "guidebook.examplemod.category.blocks_machines.name"
        );
        assert_eq!(
            keys.description,
            "guidebook.examplemod.category.blocks_machines.description"
        );
    }

    #[test]
    fn name_and_description_share_prefix() {
        for category in Category::ALL.iter().copied() {
            let keys = TranslationKeys::for_category("mymod", category);
            let name_prefix = keys.name.strip_suffix(".name").unwrap();
            let description_prefix = keys.description.strip_suffix(".description").unwrap();
            assert_eq!(name_prefix, description_prefix);
        }
    }
}
