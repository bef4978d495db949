//! Testing utilities for facetr
//!
//! Shared fixtures for unit tests: a minimal three-entry scenario and a
//! richer sample catalogue spread over four categories.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Entry;
use crate::taxonomy::Taxonomy;

/// Taxonomy for the minimal scenario: `x, y → cat1`, `z → cat2`
///
/// # Panics
/// Panics if the fixture itself is inconsistent.
#[must_use]
pub fn scenario_taxonomy() -> Taxonomy {
    Taxonomy::builder()
        .category("cat1", 1, "Category One")
        .category("cat2", 2, "Category Two")
        .tag("x", "cat1")
        .tag("y", "cat1")
        .tag("z", "cat2")
        .build()
        .expect("scenario taxonomy is valid")
}

/// Minimal scenario dataset: `A{x, y}`, `B{y}`, `C{z}`
#[must_use]
pub fn scenario_dataset() -> Vec<Entry> {
    vec![
        Entry::new("A", "Alpha", tags(&["x", "y"])),
        Entry::new("B", "Bravo", tags(&["y"])),
        Entry::new("C", "Charlie", tags(&["z"])),
    ]
}

/// A four-category taxonomy of spell effects
///
/// # Panics
/// Panics if the fixture itself is inconsistent.
#[must_use]
pub fn sample_taxonomy() -> Taxonomy {
    Taxonomy::builder()
        .category("offense", 1, "Offense")
        .category("defense", 2, "Defense")
        .category("control", 3, "Control")
        .category("utility", 4, "Utility")
        .tag("damage", "offense")
        .tag("burn", "offense")
        .tag("crit", "offense")
        .tag("shield", "defense")
        .tag("heal", "defense")
        .tag("stun", "control")
        .tag("slow", "control")
        .tag("haste", "utility")
        .tag("teleport", "utility")
        .label("crit", "Critical Strike")
        .label("haste", "Movement Speed")
        .build()
        .expect("sample taxonomy is valid")
}

/// Sample catalogue matching [`sample_taxonomy`]
#[must_use]
pub fn sample_dataset() -> Vec<Entry> {
    vec![
        Entry::new("fireball", "Fireball", tags(&["damage", "burn"]))
            .with_descriptor("Hurls a ball of flame")
            .with_description("Deals fire damage to everything in a small radius."),
        Entry::new("frost-nova", "Frost Nova", tags(&["damage", "slow"]))
            .with_descriptor("Freezes nearby foes")
            .with_description("Deals cold damage and slows enemies around the caster."),
        Entry::new("backstab", "Backstab", tags(&["damage", "crit"]))
            .with_descriptor("Strike from the shadows")
            .with_description("Always critically strikes when attacking from behind."),
        Entry::new("barrier", "Barrier", tags(&["shield"]))
            .with_descriptor("Absorbs incoming damage")
            .with_description("Surrounds the target with a protective ward."),
        Entry::new("mend", "Mend", tags(&["heal"]))
            .with_descriptor("Restores health")
            .with_description("Heals an ally over a few seconds.")
            .with_rank(Some(1)),
        Entry::new("thunderclap", "Thunderclap", tags(&["stun", "damage"]))
            .with_descriptor("Deafening blast")
            .with_description("Stuns and damages enemies in front of the caster."),
        Entry::new("blink", "Blink", tags(&["teleport"]))
            .with_descriptor("Short-range teleport")
            .with_description("Instantly moves the caster a short distance forward."),
        Entry::new("sprint", "Sprint", tags(&["haste"]))
            .with_descriptor("Run faster")
            .with_description("Greatly increases movement speed for a short time."),
        Entry::new("ember-ward", "Ember Ward", tags(&["shield", "burn"]))
            .with_descriptor("Burning shield")
            .with_description("A shield that sets attackers on fire."),
    ]
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
