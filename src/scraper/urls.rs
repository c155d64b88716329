use std::sync::LazyLock;

use regex::Regex;

use crate::scraper::BASE_URL;

static PLAYER_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/players/id/(\d+)").unwrap());

/// Resolve a potentially relative href against the site root.
pub(crate) fn resolve_url(href: &str) -> String {
    if href.starts_with("//") {
        format!("https:{href}")
    } else if href.starts_with('/') {
        format!("{BASE_URL}{href}")
    } else {
        href.to_string()
    }
}

/// Drop any `#fragment` from an href. Listing pages link the same player
/// with and without fragments; this is the dedup key.
pub(crate) fn strip_fragment(href: &str) -> &str {
    href.split('#').next().unwrap_or(href)
}

/// Convert any player link variant into the one canonical profile URL for
/// the (player, season) pair:
/// `https://www.plusliga.pl/players/id/<id>/tour/<season_id>.html`.
///
/// Links discovered on listing pages come in several shapes (including
/// `/players/section/playersByTeam/...` anchors); all of them converge
/// here. A href without an extractable player id is returned resolved but
/// otherwise unchanged, so downstream still has a usable best-effort URL.
/// Idempotent: canonicalizing a canonical URL is a no-op.
pub(crate) fn canonical_player_url(href: &str, season_id: u32) -> String {
    let resolved = resolve_url(href);
    match PLAYER_ID.captures(&resolved) {
        Some(caps) => format!("{BASE_URL}/players/id/{}/tour/{season_id}.html", &caps[1]),
        None => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_relative_and_absolute_variants_alike() {
        let a = canonical_player_url("/players/id/9/tour/55.html", 55);
        let b = canonical_player_url("https://www.plusliga.pl/players/id/9.html", 55);
        let c = canonical_player_url("/players/id/9/section/playersByTeam/tour/55.html#top", 55);
        assert_eq!(a, "https://www.plusliga.pl/players/id/9/tour/55.html");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let once = canonical_player_url("/players/id/123/tour/7.html", 7);
        let twice = canonical_player_url(&once, 7);
        assert_eq!(once, twice);
    }

    #[test]
    fn href_without_player_id_passes_through_resolved() {
        assert_eq!(
            canonical_player_url("/teams/id/4.html", 55),
            "https://www.plusliga.pl/teams/id/4.html"
        );
        assert_eq!(
            canonical_player_url("https://example.com/other", 55),
            "https://example.com/other"
        );
    }

    #[test]
    fn strip_fragment_is_a_prefix_cut() {
        assert_eq!(strip_fragment("/players/id/9.html#kadra"), "/players/id/9.html");
        assert_eq!(strip_fragment("/players/id/9.html"), "/players/id/9.html");
    }

    #[test]
    fn resolve_handles_scheme_relative_hrefs() {
        assert_eq!(
            resolve_url("//www.plusliga.pl/players.html"),
            "https://www.plusliga.pl/players.html"
        );
        assert_eq!(
            resolve_url("/players.html"),
            "https://www.plusliga.pl/players.html"
        );
    }
}
