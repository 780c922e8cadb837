//! Call of Cthulhu 7th Edition ruleset.
//!
//! Percentile characteristics with Hard/Extreme thresholds as derived values.
//! The combat block applies an external "cosmic" percentage to sanity.

use once_cell::sync::Lazy;

use super::traits::{saturate, DerivedCombatBlock, Genre, Ruleset};
use crate::character_sheet::{
    AttributeGroup, EntityFields, EntityKind, FieldDescriptor, FieldKind, LayoutHint,
    RulesetDefinition,
};
use crate::value_objects::{RandomSource, StatBlock};

/// Characteristics rolled as 5 x 3d6 (uniform 3..=18).
const WIDE_CHARACTERISTICS: [&str; 5] = ["str", "con", "dex", "app", "pow"];

/// Characteristics rolled as 5 x (2d6+6) (uniform 6..=16).
const NARROW_CHARACTERISTICS: [&str; 3] = ["int", "siz", "edu"];

/// Every key with a Hard/Extreme derived value.
const THRESHOLD_KEYS: [&str; 10] = [
    "str", "con", "siz", "dex", "app", "int", "pow", "edu", "san", "luck",
];

/// Hard and Extreme success thresholds: "half / fifth".
pub fn success_thresholds(score: i32) -> String {
    format!("{} / {}", score.div_euclid(2), score.div_euclid(5))
}

static DEFINITION: Lazy<RulesetDefinition> = Lazy::new(|| {
    let characteristic = |key: &str, label: &str| FieldDescriptor::derived_score(key, label, 99);

    RulesetDefinition {
        id: Coc7eSystem::ID.to_string(),
        display_name: "Call of Cthulhu 7th Edition".to_string(),
        groups: vec![
            AttributeGroup::new(
                "characteristics",
                "Characteristics",
                LayoutHint::Grid,
                vec![
                    characteristic("str", "Strength"),
                    characteristic("con", "Constitution"),
                    characteristic("siz", "Size"),
                    characteristic("dex", "Dexterity"),
                    characteristic("app", "Appearance"),
                    characteristic("int", "Intelligence"),
                    characteristic("pow", "Power"),
                    characteristic("edu", "Education"),
                ],
            ),
            AttributeGroup::new(
                "status",
                "Status",
                LayoutHint::Column,
                vec![
                    FieldDescriptor::new("san", "Sanity", FieldKind::ProgressBar)
                        .with_max(99)
                        .as_derived(),
                    characteristic("luck", "Luck"),
                    FieldDescriptor::new("hp", "Hit Points", FieldKind::ProgressBar),
                    FieldDescriptor::new("mp", "Magic Points", FieldKind::ProgressBar)
                        .with_parent("pow"),
                ],
            ),
        ],
        entity_fields: vec![
            EntityFields {
                kind: EntityKind::Character,
                fields: vec![
                    FieldDescriptor::new("occupation", "Occupation", FieldKind::Text),
                    FieldDescriptor::new("arsenal", "Weapons", FieldKind::RelationList),
                ],
            },
            EntityFields {
                kind: EntityKind::Creature,
                fields: vec![
                    FieldDescriptor::new("sanity_loss", "Sanity Loss", FieldKind::Text),
                    FieldDescriptor::new("arsenal", "Attacks", FieldKind::RelationList),
                ],
            },
            EntityFields {
                kind: EntityKind::Item,
                fields: vec![
                    FieldDescriptor::new("damage_dice", "Damage", FieldKind::Text),
                    FieldDescriptor::new("range", "Range", FieldKind::Text),
                ],
            },
        ],
    }
});

/// Call of Cthulhu 7th Edition ruleset.
pub struct Coc7eSystem;

impl Default for Coc7eSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Coc7eSystem {
    pub const ID: &'static str = "cthulhu";

    pub fn new() -> Self {
        Self
    }
}

impl Ruleset for Coc7eSystem {
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
        let mut stats = StatBlock::new();
        for key in WIDE_CHARACTERISTICS {
            stats.set(key, 5 * rng.roll(3, 18));
        }
        for key in NARROW_CHARACTERISTICS {
            stats.set(key, 5 * rng.roll(6, 16));
        }
        stats.set("luck", 5 * rng.roll(6, 16));
        let pow = stats.int_or("pow", 0);
        stats.set("san", pow);
        stats
    }

    fn derive(&self, key: &str, score: i32) -> Option<String> {
        THRESHOLD_KEYS
            .contains(&key)
            .then(|| success_thresholds(score))
    }

    fn combat_stats(
        &self,
        stats: &StatBlock,
        _level: i32,
        cosmic_modifier: i32,
    ) -> DerivedCombatBlock {
        let pow = stats.int_or("pow", 0);
        let con = i64::from(stats.int_or("con", 0));
        let siz = i64::from(stats.int_or("siz", 0));

        DerivedCombatBlock::Cthulhu {
            // floor(pow * (1 + cosmic / 100)) in integer arithmetic
            san: saturate((i64::from(pow) * (100 + i64::from(cosmic_modifier))).div_euclid(100)),
            hp: saturate((con + siz).div_euclid(10)),
            magic: pow.div_euclid(5),
            luck_mod: (cosmic_modifier != 0).then(|| format!("{cosmic_modifier:+}%")),
        }
    }

    fn genre(&self) -> Genre {
        Genre::Horror
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investigator() -> StatBlock {
        StatBlock::new()
            .with_stat("pow", 60)
            .with_stat("con", 55)
            .with_stat("siz", 70)
    }

    #[test]
    fn thresholds_are_half_and_fifth() {
        let system = Coc7eSystem::new();
        assert_eq!(system.derive("str", 50).as_deref(), Some("25 / 10"));
        assert_eq!(system.derive("san", 47).as_deref(), Some("23 / 9"));
        assert_eq!(system.derive("luck", 0).as_deref(), Some("0 / 0"));
        assert_eq!(system.derive("hp", 12), None);
    }

    #[test]
    fn generation_respects_ranges_and_sanity_starts_at_power() {
        let system = Coc7eSystem::new();
        let mut lowest = |min: i32, _max: i32| min;
        let stats = system.generate_stats("", &mut lowest);
        assert_eq!(stats.get_int("str"), Some(15));
        assert_eq!(stats.get_int("edu"), Some(30));
        assert_eq!(stats.get_int("luck"), Some(30));
        assert_eq!(stats.get_int("san"), stats.get_int("pow"));
        assert_eq!(stats.len(), 10);

        let mut highest = |_min: i32, max: i32| max;
        let stats = system.generate_stats("", &mut highest);
        assert_eq!(stats.get_int("pow"), Some(90));
        assert_eq!(stats.get_int("siz"), Some(80));
        assert!(system.definition().unknown_keys(&stats).is_empty());
    }

    #[test]
    fn combat_block_without_cosmic_modifier() {
        let system = Coc7eSystem::new();
        let block = system.combat_stats(&investigator(), 1, 0);
        assert_eq!(
            block,
            DerivedCombatBlock::Cthulhu {
                san: 60,
                hp: 12,
                magic: 12,
                luck_mod: None,
            }
        );
    }

    #[test]
    fn cosmic_modifier_scales_sanity_and_annotates_luck() {
        let system = Coc7eSystem::new();
        match system.combat_stats(&investigator(), 1, 15) {
            DerivedCombatBlock::Cthulhu { san, luck_mod, .. } => {
                assert_eq!(san, 69);
                assert_eq!(luck_mod.as_deref(), Some("+15%"));
            }
            other => panic!("unexpected block {other:?}"),
        }
        match system.combat_stats(&investigator(), 1, -15) {
            DerivedCombatBlock::Cthulhu { san, luck_mod, .. } => {
                assert_eq!(san, 51);
                assert_eq!(luck_mod.as_deref(), Some("-15%"));
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn negative_fractions_floor() {
        let system = Coc7eSystem::new();
        let stats = StatBlock::new().with_stat("pow", 55);
        match system.combat_stats(&stats, 1, -10) {
            // 55 * 0.9 = 49.5
            DerivedCombatBlock::Cthulhu { san, .. } => assert_eq!(san, 49),
            other => panic!("unexpected block {other:?}"),
        }
    }
}
