//! Dataset-label remapping.
//!
//! The map dataset abbreviates names ("Dem. Rep. Congo", "Eq. Guinea") and
//! spells a few differently from the player-facing list. This table rewrites
//! raw dataset labels into display names before any comparison against
//! canonical countries. It is keyed by the raw label, distinct from the
//! player-input alias table, and applied exactly once per geometry during
//! the adjacency build.
//!
//! Each territory is unified on a single display spelling here, whichever
//! alphabet the dataset happens to use ("Côte d'Ivoire" and "Ivory Coast"
//! both land on "Ivory Coast").

/// Raw dataset label -> display name. Labels absent from the table pass
/// through unchanged.
pub static DATASET_NAME_MAP: &[(&str, &str)] = &[
    ("Bosnia and Herz.", "Bosnia and Herzegovina"),
    ("Central African Rep.", "Central African Republic"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("Czechia", "Czech Republic"),
    ("Dem. Rep. Congo", "Democratic Republic of the Congo"),
    ("Dem. Rep. Korea", "North Korea"),
    ("Congo", "Republic of the Congo"),
    ("Dominican Rep.", "Dominican Republic"),
    ("Eq. Guinea", "Equatorial Guinea"),
    ("eSwatini", "Eswatini"),
    ("Falkland Is.", "Falkland Islands"),
    ("Fr. S. Antarctic Lands", "French Southern and Antarctic Lands"),
    ("Macedonia", "North Macedonia"),
    ("N. Cyprus", "Northern Cyprus"),
    ("S. Sudan", "South Sudan"),
    ("Solomon Is.", "Solomon Islands"),
    ("St. Vin. and Gren.", "Saint Vincent and the Grenadines"),
    ("St. Kitts and Nevis", "Saint Kitts and Nevis"),
    ("São Tomé and Principe", "Sao Tome and Principe"),
    ("Timor-Leste", "East Timor"),
    ("United States of America", "United States"),
    ("W. Sahara", "Western Sahara"),
];

/// Rewrites a raw dataset label into its display name.
pub fn remap_label(raw: &str) -> &str {
    DATASET_NAME_MAP
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}
