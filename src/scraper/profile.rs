use std::collections::HashMap;
use std::sync::LazyLock;

use ::scraper::{Html, Selector};
use regex::Regex;

use crate::error::Result;
use crate::labels::AttrKey;
use crate::model::{PlayerProfile, Roster};
use crate::scraper::element_text;
use crate::text::{is_name_placeholder, normalize, sanitize_player_name};

static LABEL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+)\s*[:-]\s*(.+)$").unwrap());

/// Class selectors that commonly hold the player name, across the site's
/// template generations.
const NAME_SELECTORS: [&str; 6] = [
    ".player__name",
    ".player-name",
    ".name",
    ".person__name",
    ".content h1",
    ".page-title",
];

const BIRTH_DATE_LABEL: &str = "data urodzenia";

/// Extract everything we can from a parsed profile page. The inferred
/// team from the listing page, if any, is merged later with priority by
/// the record assembler; `team` here is only what the page itself says.
pub(crate) fn extract_profile(document: &Html, roster: &Roster) -> Result<PlayerProfile> {
    let attrs = parse_profile_attrs(document)?;
    let mut profile = build_profile(attrs);
    profile.name = extract_player_name(document)?;
    if profile.team.is_none() {
        profile.team = resolve_team_from_profile(document, roster)?.map(str::to_string);
    }
    Ok(profile)
}

/// Resolve the player name, trying independent strategies in strict
/// priority order and short-circuiting on the first hit. Candidates equal
/// to the site's placeholder words are rejected and the chain continues.
pub(crate) fn extract_player_name(document: &Html) -> Result<Option<String>> {
    if let Some(name) = name_from_heading(document)? {
        return Ok(Some(name));
    }
    if let Some(name) = name_from_meta_title(document)? {
        return Ok(Some(name));
    }
    if let Some(name) = name_from_known_classes(document)? {
        return Ok(Some(name));
    }
    Ok(name_from_birth_label_heuristic(document))
}

fn accept_name(candidate: &str) -> Option<String> {
    sanitize_player_name(candidate).filter(|n| !is_name_placeholder(n))
}

fn name_from_heading(document: &Html) -> Result<Option<String>> {
    let selector = Selector::parse("h1, h2")?;
    Ok(document
        .select(&selector)
        .next()
        .and_then(|h| accept_name(&element_text(&h))))
}

fn name_from_meta_title(document: &Html) -> Result<Option<String>> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#)?;
    Ok(document
        .select(&selector)
        .next()
        .and_then(|m| m.value().attr("content"))
        .and_then(accept_name))
}

fn name_from_known_classes(document: &Html) -> Result<Option<String>> {
    for sel in NAME_SELECTORS {
        let selector = Selector::parse(sel)?;
        let name = document
            .select(&selector)
            .next()
            .and_then(|el| accept_name(&element_text(&el)));
        if name.is_some() {
            return Ok(name);
        }
    }
    Ok(None)
}

/// Last resort: on profile pages the name sits on the visible line
/// immediately before the birth-date label.
fn name_from_birth_label_heuristic(document: &Html) -> Option<String> {
    let lines: Vec<String> = document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    lines
        .iter()
        .position(|l| l.to_lowercase().starts_with(BIRTH_DATE_LABEL))
        .filter(|&i| i > 0)
        .and_then(|i| accept_name(&lines[i - 1]))
}

/// Scan the two structural shapes profile attributes come in: free-text
/// `label : value` / `label - value` containers, then table rows. Both
/// feed the same label table; the table scan runs second and wins on
/// conflict.
pub(crate) fn parse_profile_attrs(document: &Html) -> Result<HashMap<AttrKey, String>> {
    let mut attrs = HashMap::new();

    let container_selector = Selector::parse("div, li, p, tr")?;
    for el in document.select(&container_selector) {
        let text = element_text(&el);
        if let Some(caps) = LABEL_VALUE.captures(&text) {
            if let Some(key) = AttrKey::from_label(&caps[1]) {
                let value = normalize(&caps[2]);
                if !value.is_empty() {
                    attrs.insert(key, value);
                }
            }
        }
    }

    let row_selector = Selector::parse("table tr")?;
    let label_cell_selector = Selector::parse("th, td")?;
    let value_cell_selector = Selector::parse("td")?;
    for row in document.select(&row_selector) {
        let Some(label_cell) = row.select(&label_cell_selector).next() else {
            continue;
        };
        let Some(value_cell) = row.select(&value_cell_selector).last() else {
            continue;
        };
        if let Some(key) = AttrKey::from_label(&element_text(&label_cell)) {
            let value = element_text(&value_cell);
            if !value.is_empty() {
                attrs.insert(key, value);
            }
        }
    }

    Ok(attrs)
}

/// Numeric post-pass and field mapping. Numeric attributes keep the first
/// embedded integer; a digit-free value drops the key rather than erroring.
fn build_profile(mut attrs: HashMap<AttrKey, String>) -> PlayerProfile {
    let mut numeric = |key: AttrKey| attrs.remove(&key).as_deref().and_then(crate::text::extract_int);
    let height_cm = numeric(AttrKey::Height);
    let weight_kg = numeric(AttrKey::Weight);
    let spike_reach_cm = numeric(AttrKey::SpikeReach);
    let jersey_number = numeric(AttrKey::JerseyNumber);

    PlayerProfile {
        name: None,
        birth_date: attrs.remove(&AttrKey::BirthDate),
        team: attrs.remove(&AttrKey::Team),
        position: attrs.remove(&AttrKey::Position),
        height_cm,
        weight_kg,
        spike_reach_cm,
        jersey_number,
    }
}

/// Last-resort team source: team-detail links on the profile page, then
/// the whole body text, matched against the season roster.
pub(crate) fn resolve_team_from_profile<'r>(
    document: &Html,
    roster: &'r Roster,
) -> Result<Option<&'r str>> {
    let team_link_selector = Selector::parse(r#"a[href*="/teams/id/"]"#)?;
    for a in document.select(&team_link_selector) {
        if let Some(team) = roster.resolve(&element_text(&a)) {
            return Ok(Some(team));
        }
    }
    Ok(roster.find_mentioned(&element_text(&document.root_element())))
}
