//! Rolemaster ruleset.
//!
//! Ten percentile stats; the derived value is the stat bonus from a stepped
//! table. No combat layer.

use once_cell::sync::Lazy;

use super::traits::Ruleset;
use crate::character_sheet::{
    AttributeGroup, EntityFields, EntityKind, FieldDescriptor, FieldKind, LayoutHint,
    RulesetDefinition,
};
use crate::value_objects::{RandomSource, StatBlock};

const STATS: [(&str, &str); 10] = [
    ("co", "Constitution"),
    ("ag", "Agility"),
    ("sd", "Self Discipline"),
    ("me", "Memory"),
    ("re", "Reasoning"),
    ("st", "Strength"),
    ("qu", "Quickness"),
    ("pr", "Presence"),
    ("in", "Intuition"),
    ("em", "Empathy"),
];

/// Stat bonus thresholds, evaluated top-down; the first inclusive match wins.
const BONUS_TABLE: [(i32, &str); 7] = [
    (100, "+25"),
    (95, "+15"),
    (90, "+10"),
    (75, "+5"),
    (25, "0"),
    (10, "-5"),
    (5, "-10"),
];

const FLOOR_BONUS: &str = "-25";

/// Stat bonus for a score.
pub fn stat_bonus(score: i32) -> &'static str {
    BONUS_TABLE
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(FLOOR_BONUS)
}

static DEFINITION: Lazy<RulesetDefinition> = Lazy::new(|| RulesetDefinition {
    id: RolemasterSystem::ID.to_string(),
    display_name: "Rolemaster".to_string(),
    groups: vec![
        AttributeGroup::new(
            "stats",
            "Stats",
            LayoutHint::Grid,
            STATS
                .iter()
                .map(|(key, label)| FieldDescriptor::derived_score(*key, *label, 100))
                .collect(),
        ),
        AttributeGroup::new(
            "development",
            "Development",
            LayoutHint::Column,
            vec![
                FieldDescriptor::new("level", "Level", FieldKind::Numeric),
                FieldDescriptor::new("hits", "Concussion Hits", FieldKind::ProgressBar),
                FieldDescriptor::new("power_points", "Power Points", FieldKind::ProgressBar),
            ],
        ),
    ],
    entity_fields: vec![
        EntityFields {
            kind: EntityKind::Character,
            fields: vec![
                FieldDescriptor::new("profession", "Profession", FieldKind::Text),
                FieldDescriptor::new("realm", "Realm", FieldKind::Text),
                FieldDescriptor::new("arsenal", "Weapons", FieldKind::RelationList),
            ],
        },
        EntityFields {
            kind: EntityKind::Creature,
            fields: vec![FieldDescriptor::new("arsenal", "Attacks", FieldKind::RelationList)],
        },
    ],
});

/// Rolemaster ruleset.
pub struct RolemasterSystem;

impl Default for RolemasterSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RolemasterSystem {
    pub const ID: &'static str = "rolemaster";

    pub fn new() -> Self {
        Self
    }
}

impl Ruleset for RolemasterSystem {
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
        STATS
            .iter()
            .map(|(key, _)| (*key, rng.roll(1, 100)))
            .collect()
    }

    fn derive(&self, key: &str, score: i32) -> Option<String> {
        STATS
            .iter()
            .any(|(k, _)| *k == key)
            .then(|| stat_bonus(score).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_boundaries_are_inclusive() {
        assert_eq!(stat_bonus(100), "+25");
        assert_eq!(stat_bonus(101), "+25");
        assert_eq!(stat_bonus(99), "+15");
        assert_eq!(stat_bonus(95), "+15");
        assert_eq!(stat_bonus(94), "+10");
        assert_eq!(stat_bonus(90), "+10");
        assert_eq!(stat_bonus(75), "+5");
        assert_eq!(stat_bonus(74), "0");
        assert_eq!(stat_bonus(25), "0");
        assert_eq!(stat_bonus(24), "-5");
        assert_eq!(stat_bonus(10), "-5");
        assert_eq!(stat_bonus(9), "-10");
        assert_eq!(stat_bonus(5), "-10");
        assert_eq!(stat_bonus(4), "-25");
        assert_eq!(stat_bonus(0), "-25");
    }

    #[test]
    fn derives_only_stats() {
        let system = RolemasterSystem::new();
        assert_eq!(system.derive("in", 96).as_deref(), Some("+15"));
        assert_eq!(system.derive("hits", 96), None);
    }

    #[test]
    fn generation_rolls_ten_percentile_stats() {
        let system = RolemasterSystem::new();
        let mut requested = Vec::new();
        let mut rng = |min: i32, max: i32| {
            requested.push((min, max));
            max
        };
        let stats = system.generate_stats("", &mut rng);
        assert_eq!(stats.len(), 10);
        assert_eq!(stats.get_int("em"), Some(100));
        assert_eq!(requested, vec![(1, 100); 10]);
        assert!(system.definition().unknown_keys(&stats).is_empty());
    }

    #[test]
    fn has_no_combat_layer() {
        let system = RolemasterSystem::new();
        let stats = StatBlock::new().with_stat("co", 80);
        assert!(system.combat_stats(&stats, 3, 0).is_empty());
    }
}
