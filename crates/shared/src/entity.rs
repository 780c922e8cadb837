//! Stored entity rows (characters, creatures, items).
//!
//! An entity row carries a `ruleset_id` and a free-form `data` object holding
//! the stat block, a few well-known keys (`level`, `arsenal`) and cached
//! derived fields. Reading is lenient: anything that doesn't fit is skipped,
//! never fatal.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sheetsmith_domain::{DerivedCombatBlock, RangeType, StatBlock, StatValue, WeaponDescriptor};

use crate::error::RecordError;

/// Data key holding the character level.
pub const LEVEL_KEY: &str = "level";
/// Data key holding the weapon list.
pub const ARSENAL_KEY: &str = "arsenal";
/// Data key the combat block is cached under.
pub const COMBAT_KEY: &str = "combat";

/// Stored entity row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub ruleset_id: String,
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Other columns (id, name, image, ...), carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(ruleset_id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            ruleset_id: ruleset_id.into(),
            data,
            extra: Map::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Scalar entries of `data` as a stat block.
    ///
    /// Numbers and strings are kept; objects, arrays, booleans and nulls are
    /// not stats and are left out.
    pub fn stat_block(&self) -> StatBlock {
        self.data
            .iter()
            .filter_map(|(key, value)| {
                let stat = scalar_stat(value);
                if stat.is_none() && !is_structured_key(key) {
                    tracing::debug!(key = %key, "Skipping non-scalar sheet value");
                }
                stat.map(|s| (key.clone(), s))
            })
            .collect()
    }

    /// Character level from `data.level`, 1 when missing or not a number.
    pub fn level(&self) -> i32 {
        self.data
            .get(LEVEL_KEY)
            .and_then(scalar_stat)
            .and_then(|v| v.as_i32())
            .unwrap_or(1)
    }

    /// Weapons from `data.arsenal`. Malformed entries are skipped.
    pub fn arsenal(&self) -> Vec<WeaponDescriptor> {
        let Some(entries) = self.data.get(ARSENAL_KEY).and_then(Value::as_array) else {
            return Vec::new();
        };
        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match serde_json::from_value::<WeaponRecord>(entry.clone()) {
                    Ok(weapon) => Some(weapon.into()),
                    Err(error) => {
                        tracing::debug!(index, error = %error, "Skipping malformed arsenal entry");
                        None
                    }
                }
            })
            .collect()
    }

    /// Copy of this record with the combat block cached in `data`.
    ///
    /// The cache is a hint for readers that can't recompute; the engine
    /// always recomputes.
    pub fn with_cached_combat(&self, combat: &DerivedCombatBlock) -> Self {
        let mut record = self.clone();
        record.data.insert(
            COMBAT_KEY.to_string(),
            serde_json::to_value(combat).unwrap_or_default(),
        );
        record
    }
}

fn is_structured_key(key: &str) -> bool {
    key == ARSENAL_KEY || key == COMBAT_KEY
}

fn scalar_stat(value: &Value) -> Option<StatValue> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(StatValue::Int)
            .or_else(|| n.as_f64().map(StatValue::Float)),
        Value::String(s) => Some(StatValue::Text(s.clone())),
        _ => None,
    }
}

// =============================================================================
// Arsenal entries
// =============================================================================

/// Property tags stored either as a list or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PropertyList {
    List(Vec<String>),
    Text(String),
}

impl Default for PropertyList {
    fn default() -> Self {
        PropertyList::List(Vec::new())
    }
}

impl PropertyList {
    fn into_tags(self) -> Vec<String> {
        match self {
            PropertyList::List(tags) => tags,
            PropertyList::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Stored arsenal entry; accepts both snake_case and camelCase keys.
#[derive(Debug, Clone, Deserialize)]
struct WeaponRecord {
    name: String,
    #[serde(default, alias = "damageDice", alias = "damage")]
    damage_dice: String,
    #[serde(default, alias = "damageType")]
    damage_type: String,
    #[serde(default)]
    properties: PropertyList,
    #[serde(default, alias = "rangeType", alias = "range")]
    range_type: Option<String>,
}

impl From<WeaponRecord> for WeaponDescriptor {
    fn from(record: WeaponRecord) -> Self {
        let range = record.range_type.map(|r| {
            if r.trim().eq_ignore_ascii_case("ranged") {
                RangeType::Ranged
            } else {
                RangeType::Melee
            }
        });
        WeaponDescriptor {
            name: record.name,
            damage_dice: record.damage_dice,
            damage_type: record.damage_type,
            properties: record.properties.into_tags(),
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(data: Value) -> EntityRecord {
        match data {
            Value::Object(map) => EntityRecord::new("dnd5", map),
            _ => panic!("test data must be an object"),
        }
    }

    #[test]
    fn stat_block_keeps_scalars_only() {
        let entity = record(json!({
            "str": 16,
            "dex": "14",
            "speed": 9.5,
            "arsenal": [],
            "combat": {"hp": 12},
            "dead": false,
            "notes": null
        }));
        let stats = entity.stat_block();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.get_int("str"), Some(16));
        assert_eq!(stats.get_int("dex"), Some(14));
        assert_eq!(stats.get("speed"), Some(&StatValue::Float(9.5)));
    }

    #[test]
    fn level_defaults_to_one() {
        assert_eq!(record(json!({})).level(), 1);
        assert_eq!(record(json!({"level": "seven"})).level(), 1);
        assert_eq!(record(json!({"level": "7"})).level(), 7);
        assert_eq!(record(json!({"level": 4})).level(), 4);
    }

    #[test]
    fn arsenal_reads_lenient_entries() {
        let entity = record(json!({
            "arsenal": [
                {
                    "name": "Rapier",
                    "damage_dice": "1d8",
                    "damage_type": "Piercing",
                    "properties": "Finesse, Light"
                },
                {"name": "Longbow", "damageDice": "1d8", "rangeType": "Ranged"},
                {"damage_dice": "1d4"},
                "not a weapon"
            ]
        }));
        let arsenal = entity.arsenal();
        assert_eq!(arsenal.len(), 2);
        assert!(arsenal[0].is_finesse());
        assert_eq!(arsenal[0].properties, vec!["Finesse", "Light"]);
        assert!(arsenal[1].is_ranged());
        assert_eq!(arsenal[1].damage_dice, "1d8");
    }

    #[test]
    fn missing_arsenal_is_empty() {
        assert!(record(json!({"arsenal": "swords"})).arsenal().is_empty());
        assert!(record(json!({})).arsenal().is_empty());
    }

    #[test]
    fn unknown_range_reads_as_melee() {
        let entity = record(json!({"arsenal": [{"name": "Whip", "range": "reach"}]}));
        assert_eq!(entity.arsenal()[0].range, Some(RangeType::Melee));
    }

    #[test]
    fn caches_combat_without_touching_stats() {
        let entity = record(json!({"con": 14}));
        let block = DerivedCombatBlock::Empty {};
        let cached = entity.with_cached_combat(&block);
        assert_eq!(cached.data.get(COMBAT_KEY), Some(&json!({})));
        assert_eq!(cached.stat_block(), entity.stat_block());
    }

    #[test]
    fn parses_stored_row() {
        let entity = EntityRecord::from_json(
            r#"{"id": "c-9", "ruleset_id": "cthulhu", "data": {"pow": 60}}"#,
        )
        .unwrap();
        assert_eq!(entity.ruleset_id, "cthulhu");
        assert_eq!(entity.stat_block().get_int("pow"), Some(60));
        assert_eq!(entity.extra.get("id"), Some(&json!("c-9")));
    }
}
