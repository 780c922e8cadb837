//! Starting character generation: rolled stats plus a templated biography.

use serde::{Deserialize, Serialize};

use super::traits::{Genre, Ruleset};
use crate::value_objects::{RandomSource, StatBlock};

/// Species name used when none is given.
pub const DEFAULT_SPECIES: &str = "Wanderer";
/// Class name used when none is given.
pub const DEFAULT_CLASS: &str = "Adventurer";

/// Flavor text for a generated character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub summary: String,
    pub origin: String,
    pub motivation: String,
}

/// Output of character generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCharacter {
    pub stats: StatBlock,
    pub bio: Biography,
}

struct Templates {
    summary: &'static [&'static str],
    origin: &'static [&'static str],
    motivation: &'static [&'static str],
}

const FANTASY: Templates = Templates {
    summary: &[
        "A {species} {class} with more scars than stories.",
        "A soft-spoken {species} {class} who keeps a careful ledger of debts.",
        "A restless {species} {class}, never long in one town.",
    ],
    origin: &[
        "Raised among {species} traders on the river roads.",
        "Apprenticed young to an old {class} who asked no questions.",
        "The last of a {species} household that fell on hard times.",
    ],
    motivation: &[
        "Seeks a name worth remembering.",
        "Owes a debt that gold cannot settle.",
        "Hunts the thing that burned their village.",
    ],
};

const HORROR: Templates = Templates {
    summary: &[
        "A {species} {class} who sleeps with the lights on.",
        "A methodical {species} {class} whose notes grow stranger each week.",
        "A {species} {class} who has read one book too many.",
    ],
    origin: &[
        "Grew up in a {species} family that never spoke of the attic.",
        "Trained as a {class} before the letters started arriving.",
        "Came home from the war a different {species}.",
    ],
    motivation: &[
        "Needs to know what happened to their missing sister.",
        "Wants proof, even if it costs their sanity.",
        "Is trying to forget something they saw in the water.",
    ],
};

fn pick(options: &[&str], rng: &mut dyn RandomSource) -> String {
    if options.is_empty() {
        return String::new();
    }
    let last = (options.len() - 1) as i32;
    let index = rng.roll(0, last).clamp(0, last) as usize;
    options[index].to_string()
}

fn fill(template: String, species: &str, class: &str) -> String {
    template
        .replace("{species}", species)
        .replace("{class}", class)
}

/// Roll stats and write a short biography.
///
/// Blank species or class names fall back to generic ones.
pub fn generate_character(
    ruleset: &dyn Ruleset,
    species: &str,
    class: &str,
    rng: &mut dyn RandomSource,
) -> GeneratedCharacter {
    let species = match species.trim() {
        "" => DEFAULT_SPECIES,
        s => s,
    };
    let class = match class.trim() {
        "" => DEFAULT_CLASS,
        c => c,
    };

    let stats = ruleset.generate_stats(species, rng);

    let templates = match ruleset.genre() {
        Genre::Fantasy => &FANTASY,
        Genre::Horror => &HORROR,
    };
    let bio = Biography {
        summary: fill(pick(templates.summary, rng), species, class),
        origin: fill(pick(templates.origin, rng), species, class),
        motivation: pick(templates.motivation, rng),
    };

    GeneratedCharacter { stats, bio }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_systems::{Coc7eSystem, Dnd5eSystem};

    #[test]
    fn fills_species_and_class() {
        let mut first = |min: i32, _max: i32| min;
        let generated = generate_character(&Dnd5eSystem::new(), "Elf", "Ranger", &mut first);
        assert_eq!(generated.bio.summary, "A Elf Ranger with more scars than stories.");
        assert_eq!(generated.bio.origin, "Raised among Elf traders on the river roads.");
        assert_eq!(generated.stats.len(), 6);
    }

    #[test]
    fn blank_names_fall_back() {
        let mut last = |_min: i32, max: i32| max;
        let generated = generate_character(&Dnd5eSystem::new(), "  ", "", &mut last);
        assert_eq!(
            generated.bio.summary,
            "A restless Wanderer Adventurer, never long in one town."
        );
    }

    #[test]
    fn horror_rulesets_use_horror_templates() {
        let mut first = |min: i32, _max: i32| min;
        let generated = generate_character(&Coc7eSystem::new(), "Human", "Professor", &mut first);
        assert_eq!(
            generated.bio.summary,
            "A Human Professor who sleeps with the lights on."
        );
        assert_eq!(generated.stats.get_int("san"), generated.stats.get_int("pow"));
    }

    #[test]
    fn out_of_range_rolls_are_clamped() {
        let mut wild = |_min: i32, _max: i32| 99;
        let generated = generate_character(&Coc7eSystem::new(), "Human", "Priest", &mut wild);
        assert_eq!(
            generated.bio.motivation,
            "Is trying to forget something they saw in the water."
        );
    }
}
