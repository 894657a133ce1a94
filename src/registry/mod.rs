//! The category registry: fixed records derived once from the configured
//! namespace, immutable afterwards and safe for unrestricted concurrent reads.

use serde::Serialize;

use crate::category::Category;
use crate::translation::TranslationKeys;

/// One category with its derived strings precomputed
#[derive(Clone, Debug, Serialize)]
pub struct Entry {
    #[serde(rename = "id")]
    pub category: Category,
    pub translation_key_name: String,
    pub translation_key_description: String,
}

/// The stable, enumerable category contract exposed to external tooling
#[derive(Clone, Debug, Serialize)]
pub struct Registry {
    namespace: String,
    categories: Vec<Entry>,
}

impl Registry {
    /// Precompute every category's derived strings, in `Category::ALL` order
    pub fn new(namespace: &str) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let keys = TranslationKeys::for_category(namespace, category);
                Entry {
                    category,
                    translation_key_name: keys.name,
                    translation_key_description: keys.description,
                }
            })
            .collect();
        Self {
            namespace: namespace.to_string(),
            categories,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Entries in guidebook display order
    pub fn entries(&self) -> &[Entry] {
        &self.categories
    }

    /// Entries are built in declaration order, so the discriminant indexes
    /// directly into them.
    pub fn entry(&self, category: Category) -> &Entry {
        &self.categories[category as usize]
    }
}
