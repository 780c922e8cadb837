//! Rêve de Dragon ruleset.
//!
//! Twelve characteristics; the derived value is the score available at the
//! standard -4 difficulty. No combat layer.

use once_cell::sync::Lazy;

use super::traits::Ruleset;
use crate::character_sheet::{
    AttributeGroup, EntityFields, EntityKind, FieldDescriptor, FieldKind, LayoutHint,
    RulesetDefinition,
};
use crate::value_objects::{RandomSource, StatBlock};

const CHARACTERISTICS: [(&str, &str); 12] = [
    ("taille", "Taille"),
    ("apparence", "Apparence"),
    ("constitution", "Constitution"),
    ("force", "Force"),
    ("agilite", "Agilité"),
    ("dexterite", "Dextérité"),
    ("vue", "Vue"),
    ("ouie", "Ouïe"),
    ("odorat_gout", "Odorat-Goût"),
    ("volonte", "Volonté"),
    ("intellect", "Intellect"),
    ("empathie", "Empathie"),
];

/// Difficulty the derived value is quoted at.
const REFERENCE_DIFFICULTY: i32 = -4;

/// Score at the reference difficulty, floored at zero.
pub fn difficulty_line(score: i32) -> String {
    format!(
        "Diff {REFERENCE_DIFFICULTY}: {}",
        (i64::from(score) - i64::from(REFERENCE_DIFFICULTY)).max(0)
    )
}

static DEFINITION: Lazy<RulesetDefinition> = Lazy::new(|| RulesetDefinition {
    id: RddSystem::ID.to_string(),
    display_name: "Rêve de Dragon".to_string(),
    groups: vec![
        AttributeGroup::new(
            "caracteristiques",
            "Caractéristiques",
            LayoutHint::Grid,
            CHARACTERISTICS
                .iter()
                .map(|(key, label)| FieldDescriptor::derived_score(*key, *label, 20))
                .collect(),
        ),
        AttributeGroup::new(
            "etat",
            "État",
            LayoutHint::Column,
            vec![
                FieldDescriptor::new("vie", "Points de vie", FieldKind::ProgressBar),
                FieldDescriptor::new("endurance", "Endurance", FieldKind::ProgressBar),
                FieldDescriptor::new("reve", "Rêve", FieldKind::ProgressBar),
            ],
        ),
    ],
    entity_fields: vec![
        EntityFields {
            kind: EntityKind::Character,
            fields: vec![
                FieldDescriptor::new("heure_naissance", "Heure de naissance", FieldKind::Text),
                FieldDescriptor::new("arsenal", "Armes", FieldKind::RelationList),
            ],
        },
        EntityFields {
            kind: EntityKind::Creature,
            fields: vec![FieldDescriptor::new("arsenal", "Attaques", FieldKind::RelationList)],
        },
    ],
});

/// Rêve de Dragon ruleset.
pub struct RddSystem;

impl Default for RddSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RddSystem {
    pub const ID: &'static str = "rdd";

    pub fn new() -> Self {
        Self
    }
}

impl Ruleset for RddSystem {
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
            .map(|(key, _)| (*key, rng.roll(7, 16)))
            .collect()
    }

    fn derive(&self, key: &str, score: i32) -> Option<String> {
        CHARACTERISTICS
            .iter()
            .any(|(k, _)| *k == key)
            .then(|| difficulty_line(score))
    }
}
