//! D&D 5th Edition ruleset.
//!
//! Six abilities rolled 4d6-drop-lowest, signed ability modifiers as derived
//! values, and a simplified combat block (average HP per level, proficiency
//! bonus and a partial spell-slot summary).

use once_cell::sync::Lazy;

use super::traits::{saturate, signed, DerivedCombatBlock, Ruleset};
use crate::character_sheet::{
    AttributeGroup, EntityFields, EntityKind, FieldDescriptor, FieldKind, LayoutHint,
    RulesetDefinition,
};
use crate::value_objects::{best_three_of_four_d6, RandomSource, StatBlock};

/// Ability keys in sheet order.
pub const ABILITIES: [&str; 6] = ["str", "dex", "con", "int", "wis", "cha"];

/// Score assumed for a missing ability.
const DEFAULT_SCORE: i32 = 10;

/// Flat species bonus applied at generation.
const SPECIES_BONUS: i32 = 2;

/// Ability modifier: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    // Rust's / truncates toward zero; div_euclid floors for a positive divisor
    saturate((i64::from(score) - 10).div_euclid(2))
}

/// Proficiency bonus: ((level - 1) / 4) + 2, with levels below 1 read as 1.
pub fn proficiency_bonus(level: i32) -> i32 {
    (level.max(1) - 1) / 4 + 2
}

/// Ability that receives the species bonus. Unknown species boost Strength.
pub fn species_bonus_ability(species: &str) -> &'static str {
    match species.trim().to_ascii_lowercase().as_str() {
        "dwarf" | "dwarves" => "con",
        "elf" | "elves" | "halfling" | "halflings" => "dex",
        "gnome" | "gnomes" => "int",
        "firbolg" => "wis",
        "half-elf" | "tiefling" | "tieflings" => "cha",
        _ => "str",
    }
}

/// Partial spell-slot summary, grown at levels 1, 3 and 5.
fn spell_summary(level: i32) -> String {
    let mut text = String::from("1st: 2");
    if level >= 3 {
        text.push_str(" | 2nd: 2");
    }
    if level >= 5 {
        text.push_str(" | 3rd: 2");
    }
    text
}

static DEFINITION: Lazy<RulesetDefinition> = Lazy::new(|| {
    let labels = [
        "Strength",
        "Dexterity",
        "Constitution",
        "Intelligence",
        "Wisdom",
        "Charisma",
    ];
    let abilities = ABILITIES
        .iter()
        .zip(labels)
        .map(|(key, label)| FieldDescriptor::derived_score(*key, label, 30))
        .collect();

    RulesetDefinition {
        id: Dnd5eSystem::ID.to_string(),
        display_name: "D&D 5th Edition".to_string(),
        groups: vec![
            AttributeGroup::new("abilities", "Abilities", LayoutHint::Grid, abilities),
            AttributeGroup::new(
                "vitals",
                "Vitals",
                LayoutHint::Column,
                vec![
                    FieldDescriptor::new("level", "Level", FieldKind::Numeric).with_max(20),
                    FieldDescriptor::new("hp", "Hit Points", FieldKind::ProgressBar),
                    FieldDescriptor::new("hp_current", "Current HP", FieldKind::Numeric)
                        .with_parent("hp"),
                    FieldDescriptor::new("inspiration", "Inspiration", FieldKind::CheckboxNumeric),
                ],
            ),
        ],
        entity_fields: vec![
            EntityFields {
                kind: EntityKind::Character,
                fields: vec![
                    FieldDescriptor::new("species", "Species", FieldKind::Text),
                    FieldDescriptor::new("class", "Class", FieldKind::Text),
                    FieldDescriptor::new("arsenal", "Arsenal", FieldKind::RelationList),
                ],
            },
            EntityFields {
                kind: EntityKind::Creature,
                fields: vec![
                    FieldDescriptor::new("challenge", "Challenge Rating", FieldKind::Numeric)
                        .with_max(30),
                    FieldDescriptor::new("arsenal", "Attacks", FieldKind::RelationList),
                ],
            },
            EntityFields {
                kind: EntityKind::Item,
                fields: vec![
                    FieldDescriptor::new("damage_dice", "Damage Dice", FieldKind::Text),
                    FieldDescriptor::new("damage_type", "Damage Type", FieldKind::Text),
                    FieldDescriptor::new("properties", "Properties", FieldKind::Text),
                    FieldDescriptor::new("range", "Range", FieldKind::Text),
                ],
            },
        ],
    }
});

/// D&D 5th Edition ruleset.
pub struct Dnd5eSystem;

impl Default for Dnd5eSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Dnd5eSystem {
    pub const ID: &'static str = "dnd5";

    pub fn new() -> Self {
        Self
    }
}

impl Ruleset for Dnd5eSystem {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        &DEFINITION.display_name
    }

    fn definition(&self) -> &RulesetDefinition {
        &DEFINITION
    }

    fn generate_stats(&self, species: &str, rng: &mut dyn RandomSource) -> StatBlock {
        let mut stats: StatBlock = ABILITIES
            .iter()
            .map(|key| (*key, best_three_of_four_d6(rng)))
            .collect();
        let bonus_key = species_bonus_ability(species);
        let boosted = stats.int_or(bonus_key, DEFAULT_SCORE) + SPECIES_BONUS;
        stats.set(bonus_key, boosted);
        stats
    }

    fn derive(&self, key: &str, score: i32) -> Option<String> {
        ABILITIES
            .contains(&key)
            .then(|| signed(ability_modifier(score)))
    }

    fn combat_stats(
        &self,
        stats: &StatBlock,
        level: i32,
        _cosmic_modifier: i32,
    ) -> DerivedCombatBlock {
        let level = level.max(1);
        let con_mod = i64::from(ability_modifier(stats.int_or("con", DEFAULT_SCORE)));
        let dex_mod = ability_modifier(stats.int_or("dex", DEFAULT_SCORE));

        DerivedCombatBlock::Dnd5e {
            hp: saturate(10 + con_mod + (i64::from(level) - 1) * (6 + con_mod)),
            ac: dex_mod.saturating_add(10),
            init: signed(dex_mod),
            prof: format!("+{}", proficiency_bonus(level)),
            spells: spell_summary(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::testing::ScriptedRolls;

    fn sheet(con: i32, dex: i32) -> StatBlock {
        StatBlock::new().with_stat("con", con).with_stat("dex", dex)
    }

    #[test]
    fn ability_modifier_floors() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(18), 4);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn proficiency_bonus_progression() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(0), 2);
        assert_eq!(proficiency_bonus(-3), 2);
    }

    #[test]
    fn derives_signed_modifiers_for_abilities_only() {
        let system = Dnd5eSystem::new();
        assert_eq!(system.derive("str", 10).as_deref(), Some("+0"));
        assert_eq!(system.derive("str", 8).as_deref(), Some("-1"));
        assert_eq!(system.derive("str", 20).as_deref(), Some("+5"));
        assert_eq!(system.derive("hp", 20), None);
    }

    #[test]
    fn generation_rolls_six_abilities_with_species_bonus() {
        let system = Dnd5eSystem::new();
        // Every 4d6 reads 3,3,3,1 so each ability is 9 before bonuses
        let mut rolls = ScriptedRolls::new(vec![3, 3, 3, 1]);
        let stats = system.generate_stats("Dwarf", &mut rolls);

        assert_eq!(stats.len(), 6);
        assert_eq!(stats.get_int("con"), Some(11));
        assert_eq!(stats.get_int("str"), Some(9));
        assert_eq!(rolls.requested.len(), 24);
        assert!(system.definition().unknown_keys(&stats).is_empty());
    }

    #[test]
    fn unknown_species_boosts_strength() {
        let system = Dnd5eSystem::new();
        let mut always_six = |_: i32, max: i32| max;
        let stats = system.generate_stats("Clockwork Owl", &mut always_six);
        assert_eq!(stats.get_int("str"), Some(20));
        assert_eq!(stats.get_int("dex"), Some(18));
    }

    #[test]
    fn combat_block_at_level_one() {
        let system = Dnd5eSystem::new();
        let block = system.combat_stats(&sheet(14, 16), 1, 0);
        assert_eq!(
            block,
            DerivedCombatBlock::Dnd5e {
                hp: 12,
                ac: 13,
                init: "+3".to_string(),
                prof: "+2".to_string(),
                spells: "1st: 2".to_string(),
            }
        );
    }

    #[test]
    fn combat_block_defaults_missing_abilities_to_ten() {
        let system = Dnd5eSystem::new();
        let block = system.combat_stats(&StatBlock::new(), 5, 0);
        match block {
            DerivedCombatBlock::Dnd5e { hp, ac, init, prof, spells } => {
                assert_eq!(hp, 10 + 4 * 6);
                assert_eq!(ac, 10);
                assert_eq!(init, "+0");
                assert_eq!(prof, "+3");
                assert_eq!(spells, "1st: 2 | 2nd: 2 | 3rd: 2");
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn spell_summary_grows_at_three_and_five() {
        assert_eq!(spell_summary(2), "1st: 2");
        assert_eq!(spell_summary(3), "1st: 2 | 2nd: 2");
        assert_eq!(spell_summary(4), "1st: 2 | 2nd: 2");
        assert_eq!(spell_summary(20), "1st: 2 | 2nd: 2 | 3rd: 2");
    }

    #[test]
    fn hp_strictly_increases_with_level_when_per_level_gain_is_positive() {
        let system = Dnd5eSystem::new();
        for con in [3, 8, 10, 14, 20] {
            let stats = sheet(con, 10);
            let hp_at = |level| match system.combat_stats(&stats, level, 0) {
                DerivedCombatBlock::Dnd5e { hp, .. } => hp,
                _ => unreachable!(),
            };
            if ability_modifier(con) + 6 > 0 {
                for level in 1..20 {
                    assert!(hp_at(level + 1) > hp_at(level), "con {con} level {level}");
                }
            }
        }
    }

    #[test]
    fn level_below_one_reads_as_one() {
        let system = Dnd5eSystem::new();
        let stats = sheet(12, 12);
        assert_eq!(
            system.combat_stats(&stats, 0, 0),
            system.combat_stats(&stats, 1, 0)
        );
    }
}
