use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static NAME_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s[-|]\s").unwrap());
static NAME_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(zawodnicy|zawodnik)\b.*$").unwrap());

/// Collapse all whitespace runs to a single space and trim. Total: empty
/// input yields an empty string.
pub(crate) fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Normalized key used for team-name matching. The original display form
/// is always what gets stored; this is only for comparisons.
pub(crate) fn normalize_key(text: &str) -> String {
    normalize(text).to_lowercase()
}

/// First contiguous digit run in `text`, or `None`. Never fails on
/// non-numeric input.
pub(crate) fn extract_int(text: &str) -> Option<u32> {
    DIGITS.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Clean a player-name candidate: cut page-title suffixes like
/// " - Zawodnicy" or " | PlusLiga" and trailing "zawodnicy"/"zawodnik"
/// phrases. Falls back to the raw input if cleaning empties the string.
pub(crate) fn sanitize_player_name(name: &str) -> Option<String> {
    let n = normalize(name);
    if n.is_empty() {
        return None;
    }
    let cut = match NAME_SUFFIX.find(&n) {
        Some(m) => &n[..m.start()],
        None => n.as_str(),
    };
    let cleaned = NAME_NOISE.replace(cut, "").trim().to_string();
    if cleaned.is_empty() {
        Some(n)
    } else {
        Some(cleaned)
    }
}

/// True for the generic placeholder words that profile pages use where a
/// name should be; name resolution rejects these and tries the next source.
pub(crate) fn is_name_placeholder(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    lower == "zawodnicy" || lower == "zawodnik"
}
