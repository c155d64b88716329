use ::scraper::{Html, Selector};
use tracing::debug;

use crate::error::Result;
use crate::model::Roster;
use crate::scraper::{self, element_text, BASE_URL};

/// Name-length bounds that reject icon-only or decorative team links.
const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=100;

/// Fetch the authoritative team-name set for a season.
pub(crate) async fn get_season_roster(client: &reqwest::Client, season_id: u32) -> Result<Roster> {
    let url = format!("{BASE_URL}/teams/tour/{season_id}.html");
    let document = scraper::get_document(client, &url).await?;
    let roster = parse_roster(&document)?;
    debug!(season_id, teams = roster.len(), "parsed season roster");
    Ok(roster)
}

/// Collect the visible text of every team-detail link on a season's team
/// index page. The `Roster` constructor dedupes preserving first-seen
/// order.
pub(crate) fn parse_roster(document: &Html) -> Result<Roster> {
    let team_link_selector = Selector::parse(r#"a[href*="/teams/id/"]"#)?;

    let names = document
        .select(&team_link_selector)
        .map(|a| element_text(&a))
        .filter(|text| NAME_LEN.contains(&text.chars().count()));

    Ok(Roster::new(names))
}
