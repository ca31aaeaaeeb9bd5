//! Card catalog and deck lists
//!
//! The catalog is the fixed database of printable cards. A `DeckList` names
//! ten catalog ids; materializing it against the catalog produces a `Deck` of
//! fresh card instances with battle-scoped sequential ids. Catalog ids are
//! unique strings, so two printings of the same character get distinct ids
//! even when they share a display name.

use crate::core::{Card, CardId, Color, Deck, Effect, DECK_SIZE};
use crate::{EngineError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One printable card in the catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Color,
    pub effects: &'static [Effect],
}

/// Anything that can resolve catalog ids. Deck materialization goes through
/// this seam so an external card collaborator can stand in for the built-in
/// pool.
pub trait CatalogSource {
    fn entry(&self, id: &str) -> Option<&CatalogEntry>;
}

/// The built-in card pool
const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "slive",
        name: "Slive",
        color: Color::Red,
        effects: &[Effect::Shield],
    },
    CatalogEntry {
        id: "friggs_flying_cats",
        name: "Frigg's Flying Cats",
        color: Color::Red,
        effects: &[Effect::Draw],
    },
    CatalogEntry {
        id: "master_of_mountains",
        name: "Master of Mountains",
        color: Color::Red,
        effects: &[Effect::Boost],
    },
    CatalogEntry {
        id: "darek",
        name: "Darek",
        color: Color::Orange,
        effects: &[Effect::Heal],
    },
    CatalogEntry {
        id: "thorgal",
        name: "Thorgal",
        color: Color::Yellow,
        effects: &[Effect::Boost],
    },
    CatalogEntry {
        id: "aaricia",
        name: "Aaricia",
        color: Color::Yellow,
        effects: &[Effect::Peek],
    },
    CatalogEntry {
        id: "kriss_de_valnor",
        name: "Kriss de Valnor",
        color: Color::Green,
        effects: &[Effect::Rage],
    },
    CatalogEntry {
        id: "louve",
        name: "Louve",
        color: Color::Blue,
        effects: &[Effect::Stealth],
    },
    CatalogEntry {
        id: "thorgal_mariner",
        name: "Thorgal",
        color: Color::Blue,
        effects: &[Effect::Rage],
    },
    CatalogEntry {
        id: "johan",
        name: "Johan",
        color: Color::Purple,
        effects: &[Effect::Draw],
    },
    CatalogEntry {
        id: "jolan",
        name: "Jolan",
        color: Color::Purple,
        effects: &[Effect::Draw],
    },
    CatalogEntry {
        id: "nixies",
        name: "Nixies",
        color: Color::Purple,
        effects: &[Effect::Draw],
    },
    CatalogEntry {
        id: "thorgal_wanderer",
        name: "Thorgal",
        color: Color::Orange,
        effects: &[Effect::Rage],
    },
    CatalogEntry {
        id: "kriss_archer",
        name: "Kriss de Valnor",
        color: Color::Yellow,
        effects: &[Effect::Rage],
    },
    CatalogEntry {
        id: "thorgal_hunter",
        name: "Thorgal",
        color: Color::Green,
        effects: &[Effect::Rage],
    },
    CatalogEntry {
        id: "butterfly",
        name: "Butterfly",
        color: Color::Green,
        effects: &[Effect::None],
    },
    CatalogEntry {
        id: "thorgal_kin",
        name: "Thorgal",
        color: Color::Purple,
        effects: &[Effect::Rage],
    },
];

/// Indexed view over the built-in card pool
pub struct CardCatalog {
    index: FxHashMap<&'static str, &'static CatalogEntry>,
}

impl CardCatalog {
    pub fn builtin() -> Self {
        let mut index = FxHashMap::default();
        for entry in ENTRIES {
            index.insert(entry.id, entry);
        }
        CardCatalog { index }
    }

    pub fn get(&self, id: &str) -> Result<&'static CatalogEntry> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| EngineError::UnknownCard(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> impl Iterator<Item = &'static CatalogEntry> {
        ENTRIES.iter()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogSource for CardCatalog {
    fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).copied()
    }
}

/// A named list of exactly ten catalog ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub name: String,
    pub card_ids: Vec<String>,
}

impl DeckList {
    pub fn new(name: impl Into<String>, card_ids: Vec<String>) -> Self {
        DeckList {
            name: name.into(),
            card_ids,
        }
    }

    /// Check size and that every id resolves against the catalog
    pub fn validate(&self, catalog: &impl CatalogSource) -> Result<()> {
        if self.card_ids.len() != DECK_SIZE {
            return Err(EngineError::InvalidDeck(format!(
                "deck '{}' has {} cards, expected {DECK_SIZE}",
                self.name,
                self.card_ids.len()
            )));
        }
        for id in &self.card_ids {
            catalog
                .entry(id)
                .ok_or_else(|| EngineError::UnknownCard(id.clone()))?;
        }
        Ok(())
    }

    /// Produce a battle-ready deck of fresh card instances. Instance ids are
    /// assigned sequentially from `first_id` so the two seats of a battle can
    /// be kept disjoint.
    pub fn materialize(&self, catalog: &impl CatalogSource, first_id: u32) -> Result<Deck> {
        self.validate(catalog)?;
        let cards = self
            .card_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let entry = catalog
                    .entry(id)
                    .ok_or_else(|| EngineError::UnknownCard(id.clone()))?;
                Ok(Card::new(
                    CardId::new(first_id + i as u32),
                    entry.name,
                    entry.color,
                    entry.effects,
                ))
            })
            .collect::<Result<Vec<Card>>>()?;
        Deck::new(self.name.clone(), cards)
    }
}

/// Built-in starter list leaning on the common printings
pub fn starter_quest() -> DeckList {
    DeckList::new(
        "Northern Quest",
        [
            "slive",
            "friggs_flying_cats",
            "master_of_mountains",
            "darek",
            "thorgal",
            "aaricia",
            "kriss_de_valnor",
            "louve",
            "johan",
            "butterfly",
        ]
        .map(String::from)
        .to_vec(),
    )
}

/// Built-in starter list built around the rare printings
pub fn starter_tides() -> DeckList {
    DeckList::new(
        "Tides of Aran",
        [
            "thorgal_mariner",
            "thorgal_wanderer",
            "thorgal_hunter",
            "thorgal_kin",
            "kriss_archer",
            "nixies",
            "jolan",
            "louve",
            "aaricia",
            "darek",
        ]
        .map(String::from)
        .to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = CardCatalog::builtin();
        assert_eq!(catalog.len(), ENTRIES.len());
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let catalog = CardCatalog::builtin();
        assert_eq!(catalog.get("darek").unwrap().color, Color::Orange);
        assert!(matches!(
            catalog.get("no_such_card"),
            Err(EngineError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_starter_lists_materialize() {
        let catalog = CardCatalog::builtin();
        for (list, first_id) in [(starter_quest(), 0), (starter_tides(), 100)] {
            let deck = list.materialize(&catalog, first_id).unwrap();
            assert_eq!(deck.len(), DECK_SIZE);
        }
    }

    #[test]
    fn test_instance_ids_are_sequential() {
        let catalog = CardCatalog::builtin();
        let deck = starter_quest().materialize(&catalog, 50).unwrap();
        let ids: Vec<u32> = deck.cards().iter().map(|c| c.id.as_u32()).collect();
        assert_eq!(ids, (50..60).collect::<Vec<u32>>());
    }

    #[test]
    fn test_short_deck_is_rejected() {
        let catalog = CardCatalog::builtin();
        let list = DeckList::new("tiny", vec!["slive".to_string()]);
        assert!(matches!(
            list.validate(&catalog),
            Err(EngineError::InvalidDeck(_))
        ));
    }

    #[test]
    fn test_unknown_id_in_list_is_rejected() {
        let catalog = CardCatalog::builtin();
        let mut list = starter_quest();
        list.card_ids[3] = "no_such_card".to_string();
        assert!(list.materialize(&catalog, 0).is_err());
    }

    #[test]
    fn test_decklist_round_trips_through_json() {
        let list = starter_tides();
        let json = serde_json::to_string(&list).unwrap();
        let back: DeckList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
