use ::scraper::{ElementRef, Html};
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::model::{PlayerLink, Roster};
use crate::scraper::urls::{resolve_url, strip_fragment};
use crate::scraper::{self, element_text, BASE_URL};

/// Elements whose text may carry a team heading. Headers on the listing
/// page are inconsistent across seasons (plain headings, bold spans, bare
/// divs), so the net is cast wide and the roster decides what counts.
const TEAM_TEXT_TAGS: [&str; 8] = ["h1", "h2", "h3", "h4", "strong", "b", "div", "span"];

/// Fetch a season's "players by team" listing and emit one provisional
/// link per player.
pub(crate) async fn get_player_links(
    client: &reqwest::Client,
    season_id: u32,
    roster: &Roster,
) -> Result<Vec<PlayerLink>> {
    let url = format!("{BASE_URL}/players/section/playersByTeam/tour/{season_id}.html");
    let document = scraper::get_document(client, &url).await?;
    let links = scan_player_list(&document, roster);
    debug!(season_id, players = links.len(), "scanned player list");
    Ok(links)
}

/// Single-pass scan over the listing page in document order.
///
/// The page groups players under team headings sequentially, so a player
/// belongs to whatever team heading most recently preceded it. That state
/// is the `current_team` accumulator below; an explicit team-detail link
/// overrides plain-text detection because it is at least as trustworthy
/// as a heading.
pub(crate) fn scan_player_list(document: &Html, roster: &Roster) -> Vec<PlayerLink> {
    let mut current_team: Option<&str> = None;
    let mut links: Vec<PlayerLink> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        let tag = el.value().name();

        if TEAM_TEXT_TAGS.contains(&tag) {
            if let Some(team) = roster.resolve(&element_text(&el)) {
                current_team = Some(team);
            }
            continue;
        }

        if tag != "a" {
            continue;
        }
        let href = el.value().attr("href").unwrap_or_default();

        if href.contains("/teams/id/") {
            if let Some(team) = roster.resolve(&element_text(&el)) {
                current_team = Some(team);
            }
        } else if href.contains("/players/id/") {
            let text = element_text(&el);
            links.push(PlayerLink {
                href: strip_fragment(&resolve_url(href)).to_string(),
                team: current_team.map(str::to_string),
                name: (!text.is_empty()).then_some(text),
            });
        }
    }

    // First-seen wins: the first occurrence carries the right heading
    // context, later repeats (navigation blocks, footers) may not.
    links.into_iter().unique_by(|l| l.href.clone()).collect()
}
