//! Weapon attack and damage lines.
//!
//! The resolver uses D&D 5e ability modifiers and is applied to every arsenal
//! entry whatever the sheet's ruleset.

use serde::{Deserialize, Serialize};

use super::dnd5e::ability_modifier;
use super::traits::signed;
use crate::value_objects::StatBlock;

/// Property tag that lets a weapon use Dexterity when it is better.
pub const FINESSE: &str = "finesse";

/// Melee or ranged. Missing range reads as melee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    #[default]
    #[serde(alias = "Melee")]
    Melee,
    #[serde(alias = "Ranged")]
    Ranged,
}

/// A weapon as carried in an arsenal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDescriptor {
    pub name: String,
    /// Dice expression (e.g., "1d8")
    #[serde(default)]
    pub damage_dice: String,
    #[serde(default)]
    pub damage_type: String,
    /// Property tags (e.g., "Finesse", "Light")
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub range: Option<RangeType>,
}

impl WeaponDescriptor {
    pub fn new(name: impl Into<String>, damage_dice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            damage_dice: damage_dice.into(),
            damage_type: String::new(),
            properties: Vec::new(),
            range: None,
        }
    }

    pub fn with_damage_type(mut self, damage_type: impl Into<String>) -> Self {
        self.damage_type = damage_type.into();
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.properties.push(property.into());
        self
    }

    pub fn with_range(mut self, range: RangeType) -> Self {
        self.range = Some(range);
        self
    }

    pub fn is_finesse(&self) -> bool {
        self.properties
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case(FINESSE))
    }

    pub fn is_ranged(&self) -> bool {
        self.range.unwrap_or_default() == RangeType::Ranged
    }
}

/// Resolved attack line for one weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponStats {
    pub attack_bonus: String,
    pub damage_string: String,
}

/// Resolve attack bonus and damage string for a weapon.
///
/// Strength by default, the better of Strength and Dexterity for finesse
/// weapons, and Dexterity outright for ranged weapons. Proficiency only adds
/// to the attack bonus.
pub fn calculate_weapon_stats(
    weapon: &WeaponDescriptor,
    stats: &StatBlock,
    proficiency_bonus: i32,
) -> WeaponStats {
    let str_mod = ability_modifier(stats.int_or("str", 10));
    let dex_mod = ability_modifier(stats.int_or("dex", 10));

    let mut ability_mod = str_mod;
    if weapon.is_finesse() {
        ability_mod = str_mod.max(dex_mod);
    }
    if weapon.is_ranged() {
        ability_mod = dex_mod;
    }

    let mut damage_string = format!("{}{}", weapon.damage_dice.trim(), signed(ability_mod));
    let damage_type = weapon.damage_type.trim();
    if !damage_type.is_empty() {
        damage_string.push_str(&format!(" ({damage_type})"));
    }

    WeaponStats {
        attack_bonus: signed(ability_mod.saturating_add(proficiency_bonus)),
        damage_string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(str_score: i32, dex_score: i32) -> StatBlock {
        StatBlock::new()
            .with_stat("str", str_score)
            .with_stat("dex", dex_score)
    }

    #[test]
    fn finesse_uses_better_of_str_and_dex() {
        let rapier = WeaponDescriptor::new("Rapier", "1d8")
            .with_damage_type("Piercing")
            .with_property("Finesse");
        let line = calculate_weapon_stats(&rapier, &stats(8, 18), 2);
        assert_eq!(line.attack_bonus, "+6");
        assert_eq!(line.damage_string, "1d8+4 (Piercing)");
    }

    #[test]
    fn ranged_uses_dex_even_when_strength_is_better() {
        let bow = WeaponDescriptor::new("Longbow", "1d8")
            .with_damage_type("Piercing")
            .with_range(RangeType::Ranged);
        let line = calculate_weapon_stats(&bow, &stats(18, 8), 2);
        assert_eq!(line.attack_bonus, "+1");
        assert_eq!(line.damage_string, "1d8-1 (Piercing)");
    }

    #[test]
    fn ranged_overrides_finesse() {
        let dagger = WeaponDescriptor::new("Thrown Dagger", "1d4")
            .with_property("finesse")
            .with_range(RangeType::Ranged);
        let line = calculate_weapon_stats(&dagger, &stats(18, 12), 2);
        assert_eq!(line.attack_bonus, "+3");
    }

    #[test]
    fn missing_tags_read_as_plain_melee() {
        let club = WeaponDescriptor::new("Club", "1d4").with_damage_type("Bludgeoning");
        let line = calculate_weapon_stats(&club, &stats(16, 20), 3);
        assert_eq!(line.attack_bonus, "+6");
        assert_eq!(line.damage_string, "1d4+3 (Bludgeoning)");
    }

    #[test]
    fn damage_type_is_optional() {
        let fist = WeaponDescriptor::new("Unarmed", "1");
        let line = calculate_weapon_stats(&fist, &StatBlock::new(), 2);
        assert_eq!(line.attack_bonus, "+2");
        assert_eq!(line.damage_string, "1+0");
    }

    #[test]
    fn descriptor_reads_with_defaults() {
        let weapon: WeaponDescriptor =
            serde_json::from_str(r#"{"name": "Sling", "damageDice": "1d4", "range": "Ranged"}"#)
                .unwrap();
        assert!(weapon.is_ranged());
        assert!(!weapon.is_finesse());
        assert!(weapon.damage_type.is_empty());
    }
}
