use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static SEASON_YEARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})/(\d{4})").unwrap());

/// One season ("tour") of the league, as listed on the teams index page.
///
/// Immutable once resolved; created once per catalog fetch and consumed
/// for the duration of the pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Season {
    /// Display label as shown on the index page, e.g. "Sezon 2024/2025".
    pub display_text: String,
    /// Numeric tour identifier used in season-scoped URLs.
    pub id: u32,
    /// Hyphenated two-year identifier, e.g. "2024-2025".
    pub slug: String,
}

impl Season {
    pub fn new(display_text: String, id: u32) -> Option<Self> {
        let slug = season_slug(&display_text)?;
        Some(Season {
            display_text,
            id,
            slug,
        })
    }

    /// First of the two years in the display label, used for sorting the
    /// catalog chronologically.
    pub fn start_year(&self) -> u32 {
        self.slug
            .split('-')
            .next()
            .and_then(|y| y.parse().ok())
            .unwrap_or_default()
    }
}

/// Derive the season slug from a display label: the two consecutive
/// four-digit years joined by a hyphen.
fn season_slug(display_text: &str) -> Option<String> {
    SEASON_YEARS
        .captures(display_text)
        .map(|c| format!("{}-{}", &c[1], &c[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_display_text() {
        let season = Season::new("Sezon 2024/2025".to_string(), 55).unwrap();
        assert_eq!(season.slug, "2024-2025");
        assert_eq!(season.start_year(), 2024);
    }

    #[test]
    fn rejects_labels_without_year_pair() {
        assert!(Season::new("Turniej finałowy".to_string(), 1).is_none());
    }
}
