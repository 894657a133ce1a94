use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

// The id of each category is its variant name in snake_case, pasted at
// compile time so it cannot drift from the symbol.
macro_rules! categories {
    ($($variant:ident,)+) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Category {
            $($variant,)+
        }

        impl Category {
            /// Every category, in guidebook display order
            pub const ALL: &'static [Category] = &[$(Category::$variant,)+];

            pub fn id(&self) -> &'static str {
                paste::paste! {
                    match self {
                        $(Self::$variant => stringify!([<$variant:snake>]),)+
                    }
                }
            }
        }
    };
}

categories! {
    Items,
    ItemsMetalAndOre,
    ItemsGear,
    ItemsUpgrades,
    ItemsModules,
    Blocks,
    BlocksMachines,
    BlocksTransmitters,
    BlocksStorage,
    Multiblocks,
    OreProcessing,
    Chemicals,
    Entities,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.id() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_snake_case_variant_names() {
        assert_eq!(Category::Items.id(), "items");
        assert_eq!(Category::ItemsMetalAndOre.id(), "items_metal_and_ore");
        assert_eq!(Category::BlocksMachines.id(), "blocks_machines");
        assert_eq!(Category::OreProcessing.id(), "ore_processing");

        for category in Category::ALL {
            assert!(
                category
                    .id()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
                "id {:?} is not lowercase",
                category.id()
            );
        }
    }

    #[test]
    fn id_is_stable_across_calls() {
        for category in Category::ALL {
            assert_eq!(category.id(), category.id());
        }
    }

    #[test]
    fn parse_resolves_known_ids() {
        for category in Category::ALL.iter().copied() {
            assert_eq!(category.id().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn parse_rejects_unknown_id() {
        assert!("redstone".parse::<Category>().is_err());
        // Ids are lowercase only
        assert!("ITEMS".parse::<Category>().is_err());
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(Category::Chemicals.to_string(), "chemicals");
    }
}
