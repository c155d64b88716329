use std::sync::LazyLock;

use ::scraper::{Html, Selector};
use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::error::{PlusLigaError, Result};
use crate::model::Season;
use crate::scraper::{self, element_text, BASE_URL};

static SEASON_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sezon \d{4}/\d{4}$").unwrap());
static TOUR_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/teams/tour/(\d+)").unwrap());

/// Discover all seasons from the teams index page.
pub(crate) async fn get_seasons(client: &reqwest::Client) -> Result<Vec<Season>> {
    let url = format!("{BASE_URL}/teams.html");
    let document = scraper::get_document(client, &url).await?;
    let seasons = parse_seasons(&document)?;
    debug!(count = seasons.len(), "parsed season catalog");
    if seasons.is_empty() {
        return Err(PlusLigaError::NoSeasonsFound);
    }
    Ok(seasons)
}

/// Scan all anchors, keeping only those that point at a season tour URL
/// AND whose visible text is exactly a "Sezon YYYY/YYYY" label. Requiring
/// both sides rejects unrelated links that merely mention a season and
/// season-shaped text wrapped around other navigation.
pub(crate) fn parse_seasons(document: &Html) -> Result<Vec<Season>> {
    let link_selector = Selector::parse("a[href]")?;

    let seasons = document
        .select(&link_selector)
        .filter_map(|a| {
            let text = element_text(&a);
            if !SEASON_TEXT.is_match(&text) {
                return None;
            }
            let href = a.value().attr("href")?;
            let id = TOUR_ID
                .captures(href)
                .and_then(|c| c[1].parse::<u32>().ok())?;
            Season::new(text, id)
        })
        .unique_by(|s| (s.display_text.clone(), s.id))
        .sorted_by_key(Season::start_year)
        .collect();

    Ok(seasons)
}
