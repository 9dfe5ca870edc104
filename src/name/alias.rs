//! Player-input alias resolution.
//!
//! Maps anything a player might reasonably type to a canonical country.
//! The table is seeded with every canonical name, then extended with the
//! curated rows below: abbreviations, alternate and historical names, and
//! "the"-prefixed forms. Lookup is exact on the normalized key; there is
//! no fuzzy matching.

use std::collections::HashMap;

use crate::country::{self, CountryId, COUNTRY_COUNT};

use super::normalize::normalize;

/// Curated aliases, written as a player would type them.
///
/// Keys collide only by deliberate curation; when two rows normalize to the
/// same key the last one wins. Dotted forms are listed explicitly because
/// normalization strips only whitespace and hyphens.
static ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("U.S.", "United States"),
    ("U.S.A", "United States"),
    ("U.S.A.", "United States"),
    ("America", "United States"),
    ("United States of America", "United States"),
    ("the United States", "United States"),
    ("UK", "United Kingdom"),
    ("U.K.", "United Kingdom"),
    ("Britain", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("the United Kingdom", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
    ("the Emirates", "United Arab Emirates"),
    ("DRC", "Democratic Republic of the Congo"),
    ("DR Congo", "Democratic Republic of the Congo"),
    ("Congo-Kinshasa", "Democratic Republic of the Congo"),
    ("Zaire", "Democratic Republic of the Congo"),
    ("Congo", "Republic of the Congo"),
    ("Congo-Brazzaville", "Republic of the Congo"),
    ("the Congo", "Republic of the Congo"),
    ("CAR", "Central African Republic"),
    ("Czechia", "Czech Republic"),
    ("the Czech Republic", "Czech Republic"),
    ("Swaziland", "Eswatini"),
    ("Burma", "Myanmar"),
    ("Holland", "Netherlands"),
    ("the Netherlands", "Netherlands"),
    ("Macedonia", "North Macedonia"),
    ("Timor-Leste", "East Timor"),
    ("Cote d'Ivoire", "Ivory Coast"),
    ("Cote d Ivoire", "Ivory Coast"),
    ("Cabo Verde", "Cape Verde"),
    ("DPRK", "North Korea"),
    ("Vatican", "Vatican City"),
    ("Holy See", "Vatican City"),
    ("Bosnia", "Bosnia and Herzegovina"),
    ("Bosnia Herzegovina", "Bosnia and Herzegovina"),
    ("the Gambia", "Gambia"),
    ("the Bahamas", "Bahamas"),
    ("the Philippines", "Philippines"),
    ("St Kitts", "Saint Kitts and Nevis"),
    ("St Kitts and Nevis", "Saint Kitts and Nevis"),
    ("St. Kitts and Nevis", "Saint Kitts and Nevis"),
    ("St Lucia", "Saint Lucia"),
    ("St. Lucia", "Saint Lucia"),
    ("St Vincent", "Saint Vincent and the Grenadines"),
    ("St Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ("St. Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ("Sao Tome", "Sao Tome and Principe"),
    ("Antigua", "Antigua and Barbuda"),
    ("Trinidad", "Trinidad and Tobago"),
    ("PNG", "Papua New Guinea"),
    ("NZ", "New Zealand"),
    ("Federated States of Micronesia", "Micronesia"),
    ("FSM", "Micronesia"),
    ("Slovak Republic", "Slovakia"),
    ("Kyrgyz Republic", "Kyrgyzstan"),
    ("Turkiye", "Turkey"),
    ("Brunei Darussalam", "Brunei"),
    ("Russian Federation", "Russia"),
    ("PRC", "China"),
    ("People's Republic of China", "China"),
    ("Republic of China", "Taiwan"),
    ("Formosa", "Taiwan"),
    ("Persia", "Iran"),
    ("Siam", "Thailand"),
    ("Ceylon", "Sri Lanka"),
    ("Abyssinia", "Ethiopia"),
];

/// Normalized-key lookup from player input to canonical countries.
///
/// Built once per session and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, CountryId>,
}

impl AliasTable {
    /// Builds the table from the canonical list plus the curated aliases.
    pub fn new() -> AliasTable {
        let mut entries = HashMap::with_capacity(COUNTRY_COUNT + ALIASES.len());
        for id in country::all() {
            entries.insert(normalize(id.name()), id);
        }
        for (alias, canonical) in ALIASES {
            let Some(id) = CountryId::from_name(canonical) else {
                log::warn!("alias '{alias}' targets unknown country '{canonical}'");
                continue;
            };
            let key = normalize(alias);
            if let Some(previous) = entries.insert(key, id) {
                if previous != id {
                    log::debug!(
                        "alias '{}' remapped from {} to {}",
                        alias,
                        previous.name(),
                        id.name()
                    );
                }
            }
        }
        AliasTable { entries }
    }

    /// Resolves raw player input to a canonical country.
    ///
    /// `None` is the ordinary "not yet a valid guess" outcome, not an error.
    pub fn resolve(&self, raw: &str) -> Option<CountryId> {
        self.entries.get(&normalize(raw)).copied()
    }

    /// Number of distinct normalized keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        AliasTable::new()
    }
}
