//! Ruleset Schema Types for Dynamic Sheet Rendering
//!
//! Each ruleset publishes a schema describing which attributes its sheets
//! carry, how they are grouped, and which of them have a derived display
//! value. Form and sheet renderers consume the schema without needing any
//! ruleset-specific knowledge.
//!
//! # Design Philosophy
//!
//! - **Schema-driven rendering**: the ruleset knows its fields, the UI just displays
//! - **Field-level granularity**: each field carries a kind, optional max and hints
//! - **Derived fields**: some fields show a computed value next to the raw score
//! - **Groups**: fields are grouped into ordered sections for layout

use serde::{Deserialize, Serialize};

use crate::value_objects::StatBlock;

// =============================================================================
// Ruleset Definition
// =============================================================================

/// Complete schema for one ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesetDefinition {
    /// Ruleset ID (e.g., "dnd5", "cthulhu")
    pub id: String,
    /// Human-readable ruleset name
    pub display_name: String,
    /// Ordered attribute groups shared by every entity kind
    pub groups: Vec<AttributeGroup>,
    /// Extra fields that only some entity kinds carry
    #[serde(default)]
    pub entity_fields: Vec<EntityFields>,
}

impl RulesetDefinition {
    /// Look up a field by key across groups and entity extras.
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.all_fields().find(|f| f.key == key)
    }

    /// Every field in the schema, groups first, then entity extras.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups
            .iter()
            .flat_map(|g| g.fields.iter())
            .chain(self.entity_fields.iter().flat_map(|e| e.fields.iter()))
    }

    /// Keys of fields flagged `derived`, in schema order.
    pub fn derived_keys(&self) -> Vec<&str> {
        self.all_fields()
            .filter(|f| f.derived)
            .map(|f| f.key.as_str())
            .collect()
    }

    /// Extra fields for one entity kind (empty when the ruleset adds none).
    pub fn entity_fields(&self, kind: EntityKind) -> &[FieldDescriptor] {
        self.entity_fields
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn group(&self, id: &str) -> Option<&AttributeGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Keys present in `stats` that this schema doesn't declare.
    ///
    /// StatBlocks are free-form, so this is how key typos get caught.
    pub fn unknown_keys<'a>(&self, stats: &'a StatBlock) -> Vec<&'a str> {
        stats.keys().filter(|k| self.field(k).is_none()).collect()
    }
}

/// A group of attributes (e.g., "Abilities", "Characteristics").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    /// Unique group identifier
    pub id: String,
    /// Display label for the group header
    pub label: String,
    /// How the group is laid out
    pub layout: LayoutHint,
    /// Fields within this group
    pub fields: Vec<FieldDescriptor>,
}

impl AttributeGroup {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        layout: LayoutHint,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            layout,
            fields,
        }
    }
}

/// Layout hint for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutHint {
    /// Compact score grid
    Grid,
    /// One field per row
    Column,
    /// Fields flow on a single line
    Inline,
}

/// Kind of entity a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Character,
    Creature,
    Item,
}

/// Extra fields for one entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFields {
    pub kind: EntityKind,
    pub fields: Vec<FieldDescriptor>,
}

// =============================================================================
// Field Descriptors
// =============================================================================

/// How a field is entered and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Numeric,
    /// Current value rendered against a maximum (HP, sanity)
    ProgressBar,
    /// Number with a checkbox (proficiency, skill ticks)
    CheckboxNumeric,
    /// List of links to other records (inventory, arsenal)
    RelationList,
    Text,
}

/// Definition of a single field in a ruleset schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field key, unique within the ruleset
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    /// Upper bound, or for progress bars the static maximum
    #[serde(default)]
    pub max: Option<i32>,
    /// Whether the field shows a derived value
    #[serde(default)]
    pub derived: bool,
    /// Attribute this field hangs off (skills under abilities, current under max)
    #[serde(default)]
    pub parent: Option<String>,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            max: None,
            derived: false,
            parent: None,
        }
    }

    /// Numeric score with a derived display value.
    pub fn derived_score(key: impl Into<String>, label: impl Into<String>, max: i32) -> Self {
        Self::new(key, label, FieldKind::Numeric)
            .with_max(max)
            .as_derived()
    }

    pub fn with_max(mut self, max: i32) -> Self {
        self.max = Some(max);
        self
    }

    pub fn as_derived(mut self) -> Self {
        self.derived = true;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}
