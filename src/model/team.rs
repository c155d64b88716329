use crate::text::normalize_key;

/// The authoritative, season-scoped set of team names, in the order the
/// roster page lists them.
///
/// Every team inference in the pipeline (list-page headings, explicit team
/// links, profile fallback scans) must resolve to a member of this set or
/// be treated as unknown. Matching uses a normalized key; the original
/// display form is always what gets stored and output.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<RosterTeam>,
}

#[derive(Debug, Clone)]
struct RosterTeam {
    name: String,
    key: String,
}

impl Roster {
    /// Build a roster from official display names, deduplicating by
    /// normalized key while preserving first-seen order.
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut teams: Vec<RosterTeam> = Vec::new();
        for name in names {
            let key = normalize_key(&name);
            if !teams.iter().any(|t| t.key == key) {
                teams.push(RosterTeam { name, key });
            }
        }
        Roster { teams }
    }

    /// Resolve a piece of observed text to an official team name.
    ///
    /// An exact key match wins outright. Otherwise containment in either
    /// direction counts, because team headers often carry extra words
    /// (city, sponsor) and abbreviated links may carry fewer. When several
    /// keys are contained in the text, the longest one is chosen, so a
    /// team whose name embeds another team's name resolves to itself.
    pub fn resolve(&self, text: &str) -> Option<&str> {
        let text_key = normalize_key(text);
        if text_key.is_empty() {
            return None;
        }
        if let Some(team) = self.teams.iter().find(|t| t.key == text_key) {
            return Some(&team.name);
        }
        // Reverse containment only for fragments long enough to be a
        // deliberate abbreviation; stray one- or two-letter text nodes
        // would otherwise match half the roster.
        let abbreviated = text_key.chars().count() >= 3;
        self.teams
            .iter()
            .filter(|t| text_key.contains(&t.key) || (abbreviated && t.key.contains(&text_key)))
            .max_by_key(|t| t.key.len())
            .map(|t| t.name.as_str())
    }

    /// True when `text` mentions any roster team. Used for whole-body
    /// scans where only key-in-text containment makes sense.
    pub fn find_mentioned(&self, text: &str) -> Option<&str> {
        let text_key = normalize_key(text);
        if text_key.is_empty() {
            return None;
        }
        self.teams
            .iter()
            .filter(|t| text_key.contains(&t.key))
            .max_by_key(|t| t.key.len())
            .map(|t| t.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Official display names in roster order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|t| t.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| n.to_string()))
    }

    #[test]
    fn dedupes_preserving_first_seen_order() {
        let r = roster(&["Team Alpha", "Team Beta", "TEAM ALPHA"]);
        assert_eq!(r.len(), 2);
        assert_eq!(r.names().collect::<Vec<_>>(), vec!["Team Alpha", "Team Beta"]);
    }

    #[test]
    fn exact_match_ignores_case_and_spacing() {
        let r = roster(&["Jastrzębski Węgiel"]);
        assert_eq!(r.resolve("  jastrzębski   węgiel "), Some("Jastrzębski Węgiel"));
    }

    #[test]
    fn containment_matches_headers_with_extra_words() {
        let r = roster(&["Skra Bełchatów"]);
        assert_eq!(
            r.resolve("PGE GiEK Skra Bełchatów — skład"),
            Some("Skra Bełchatów")
        );
    }

    #[test]
    fn longest_key_wins_on_nested_team_names() {
        let r = roster(&["Projekt", "Projekt Warszawa"]);
        assert_eq!(
            r.resolve("Zawodnicy Projekt Warszawa 2024"),
            Some("Projekt Warszawa")
        );
    }

    #[test]
    fn abbreviated_text_matches_but_stray_fragments_do_not() {
        let r = roster(&["Zaksa Kędzierzyn-Koźle"]);
        assert_eq!(r.resolve("Zaksa"), Some("Zaksa Kędzierzyn-Koźle"));
        assert_eq!(r.resolve("Za"), None);
    }

    #[test]
    fn unknown_text_resolves_to_none() {
        let r = roster(&["Team Alpha"]);
        assert_eq!(r.resolve("Tabela wyników"), None);
        assert_eq!(r.resolve(""), None);
    }
}
