//! RuneQuest ruleset.
//!
//! Seven characteristics in the 3d6 band; the derived value is a coarse
//! damage/skill bonus. No combat layer.

use once_cell::sync::Lazy;

use super::traits::Ruleset;
use crate::character_sheet::{
    AttributeGroup, EntityFields, EntityKind, FieldDescriptor, FieldKind, LayoutHint,
    RulesetDefinition,
};
use crate::value_objects::{RandomSource, StatBlock};

const CHARACTERISTICS: [(&str, &str); 7] = [
    ("str", "Strength"),
    ("con", "Constitution"),
    ("siz", "Size"),
    ("dex", "Dexterity"),
    ("int", "Intelligence"),
    ("pow", "Power"),
    ("cha", "Charisma"),
];

/// Characteristic bonus: above 16 adds a die, above 12 a flat point.
pub fn characteristic_bonus(score: i32) -> &'static str {
    if score > 16 {
        "+1D4"
    } else if score > 12 {
        "+1"
    } else {
        "0"
    }
}

static DEFINITION: Lazy<RulesetDefinition> = Lazy::new(|| RulesetDefinition {
    id: RuneQuestSystem::ID.to_string(),
    display_name: "RuneQuest".to_string(),
    groups: vec![
        AttributeGroup::new(
            "characteristics",
            "Characteristics",
            LayoutHint::Grid,
            CHARACTERISTICS
                .iter()
                .map(|(key, label)| FieldDescriptor::derived_score(*key, *label, 21))
                .collect(),
        ),
        AttributeGroup::new(
            "attributes",
            "Attributes",
            LayoutHint::Inline,
            vec![
                FieldDescriptor::new("hp", "Hit Points", FieldKind::ProgressBar),
                FieldDescriptor::new("mp", "Magic Points", FieldKind::ProgressBar)
                    .with_parent("pow"),
                FieldDescriptor::new("move", "Movement", FieldKind::Numeric),
            ],
        ),
    ],
    entity_fields: vec![
        EntityFields {
            kind: EntityKind::Character,
            fields: vec![
                FieldDescriptor::new("homeland", "Homeland", FieldKind::Text),
                FieldDescriptor::new("cult", "Cult", FieldKind::Text),
                FieldDescriptor::new("arsenal", "Weapons", FieldKind::RelationList),
            ],
        },
        EntityFields {
            kind: EntityKind::Creature,
            fields: vec![FieldDescriptor::new("arsenal", "Attacks", FieldKind::RelationList)],
        },
    ],
});

/// RuneQuest ruleset.
pub struct RuneQuestSystem;

impl Default for RuneQuestSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RuneQuestSystem {
    pub const ID: &'static str = "runequest";

    pub fn new() -> Self {
        Self
    }
}

impl Ruleset for RuneQuestSystem {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        &DEFINITION.display_name
    }

    fn definition(&self) -> &RulesetDefinition {
        &DEFINITION
    }

    fn generate_stats(&self, _species: &str, rng: &mut dyn RandomSource) -> StatBlock {
        CHARACTERISTICS
            .iter()
            .map(|(key, _)| (*key, rng.roll(6, 18)))
            .collect()
    }

    fn derive(&self, key: &str, score: i32) -> Option<String> {
        CHARACTERISTICS
            .iter()
            .any(|(k, _)| *k == key)
            .then(|| characteristic_bonus(score).to_string())
    }
}
