use std::str::FromStr;

use crate::text::normalize_key;

/// Canonical attribute keys extracted from player profile pages.
///
/// The `strum` serializations are the lower-cased Polish labels as they
/// appear on plusliga.pl, including historical synonyms for the same
/// concept (older seasons label the team "klub" or "zespół", and the
/// spike-reach label has gone through several wordings).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum_macros::EnumString)]
pub enum AttrKey {
    #[strum(serialize = "data urodzenia")]
    BirthDate,
    #[strum(serialize = "drużyna", serialize = "klub", serialize = "zespół")]
    Team,
    #[strum(serialize = "pozycja")]
    Position,
    #[strum(serialize = "wzrost")]
    Height,
    #[strum(serialize = "waga")]
    Weight,
    #[strum(
        serialize = "zasięg ataku",
        serialize = "zasięg w ataku",
        serialize = "zasięg ataku w wyskoku",
        serialize = "zasięg z wyskoku do ataku"
    )]
    SpikeReach,
    #[strum(serialize = "numer")]
    JerseyNumber,
}

impl AttrKey {
    /// Map an observed label to its canonical key. Lookup is exact-match
    /// on the normalized, lower-cased label; unknown labels map to `None`
    /// (profile pages are full of unrelated label-shaped text).
    pub fn from_label(label: &str) -> Option<Self> {
        AttrKey::from_str(&normalize_key(label)).ok()
    }

    /// Keys whose values are integers embedded in free text.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AttrKey::Height | AttrKey::Weight | AttrKey::SpikeReach | AttrKey::JerseyNumber
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_current_labels() {
        assert_eq!(AttrKey::from_label("Data urodzenia"), Some(AttrKey::BirthDate));
        assert_eq!(AttrKey::from_label("Drużyna"), Some(AttrKey::Team));
        assert_eq!(AttrKey::from_label("Pozycja"), Some(AttrKey::Position));
        assert_eq!(AttrKey::from_label("Wzrost"), Some(AttrKey::Height));
        assert_eq!(AttrKey::from_label("Waga"), Some(AttrKey::Weight));
        assert_eq!(AttrKey::from_label("Numer"), Some(AttrKey::JerseyNumber));
    }

    #[test]
    fn maps_historical_synonyms() {
        assert_eq!(AttrKey::from_label("Klub"), Some(AttrKey::Team));
        assert_eq!(AttrKey::from_label("Zespół"), Some(AttrKey::Team));
        assert_eq!(AttrKey::from_label("Zasięg ataku"), Some(AttrKey::SpikeReach));
        assert_eq!(
            AttrKey::from_label("Zasięg z wyskoku do ataku"),
            Some(AttrKey::SpikeReach)
        );
    }

    #[test]
    fn normalizes_before_lookup() {
        assert_eq!(AttrKey::from_label("  WZROST \n"), Some(AttrKey::Height));
    }

    #[test]
    fn unknown_labels_are_ignored() {
        assert_eq!(AttrKey::from_label("Mecze"), None);
        assert_eq!(AttrKey::from_label(""), None);
    }

    #[test]
    fn numeric_keys() {
        assert!(AttrKey::Height.is_numeric());
        assert!(AttrKey::JerseyNumber.is_numeric());
        assert!(!AttrKey::BirthDate.is_numeric());
        assert!(!AttrKey::Team.is_numeric());
    }
}
