//! # Name Catalog
//!
//! Built-in display names for a subset of identifiers. Anything outside the
//! table falls back to [`UNKNOWN_NAME`]. Names for the rest of the range come
//! from a remote lookup that lives outside this crate.

use crate::identifier::Identifier;

/// Name shown for identifiers without a built-in entry.
pub const UNKNOWN_NAME: &str = "Unbekannt";

/// Sorted by identifier so lookups can binary search.
const NAMES: &[(u16, &str)] = &[
    (1, "Bisasam"),
    (2, "Bisaknosp"),
    (3, "Bisaflor"),
    (4, "Glumanda"),
    (5, "Glutexo"),
    (6, "Glurak"),
    (7, "Schiggy"),
    (8, "Schillok"),
    (9, "Turtok"),
    (25, "Pikachu"),
    (26, "Raichu"),
    (35, "Piepi"),
    (36, "Pixi"),
    (39, "Pummeluff"),
    (40, "Knuddeluff"),
    (54, "Enton"),
    (55, "Entoron"),
    (58, "Fukano"),
    (59, "Arkani"),
    (63, "Abra"),
    (64, "Kadabra"),
    (65, "Simsala"),
    (100, "Voltobal"),
    (101, "Lektrobal"),
    (147, "Dratini"),
    (148, "Dragonir"),
    (149, "Dragoran"),
    (150, "Mewtu"),
    (151, "Mew"),
];

/// Built-in name for `id`, if there is one.
pub fn lookup(id: Identifier) -> Option<&'static str> {
    NAMES
        .binary_search_by_key(&id.get(), |(n, _)| *n)
        .ok()
        .map(|idx| NAMES[idx].1)
}

/// Display name for `id`, falling back to [`UNKNOWN_NAME`].
pub fn name_for(id: Identifier) -> &'static str {
    lookup(id).unwrap_or(UNKNOWN_NAME)
}
