use std::time::Duration;

use ::scraper::Html;
use tracing::{info, warn};

use crate::error::Result;
use crate::model::{PlayerLink, PlayerRecord, Roster, Season};
use crate::scraper::urls::canonical_player_url;
use crate::scraper::{self, players, profile, teams};

/// Courtesy pause between consecutive profile fetches.
const FETCH_PAUSE: Duration = Duration::from_millis(600);
/// Progress is logged every this many players.
const PROGRESS_EVERY: usize = 20;

/// Scrape one season end to end: roster, player list, then one profile
/// fetch per deduplicated player link.
///
/// Roster or listing failures abort the season (and with it the run);
/// a single player's profile fetch failing is logged and skipped so the
/// rest of the season still comes out.
pub(crate) async fn scrape_season(
    client: &reqwest::Client,
    season: &Season,
) -> Result<Vec<PlayerRecord>> {
    let roster = teams::get_season_roster(client, season.id).await?;
    let links = players::get_player_links(client, season.id, &roster).await?;
    info!(
        season = %season.slug,
        teams = roster.len(),
        players = links.len(),
        "season resolved"
    );

    let total = links.len();
    let mut records = Vec::with_capacity(total);
    for (i, link) in links.iter().enumerate() {
        let url = canonical_player_url(&link.href, season.id);

        let document = match scraper::get_document(client, &url).await {
            Ok(document) => document,
            Err(e) => {
                warn!(url, error = %e, "skipping player: profile fetch failed");
                tokio::time::sleep(FETCH_PAUSE).await;
                continue;
            }
        };

        records.push(assemble_record(season, link, url, &document, &roster)?);

        if (i + 1) % PROGRESS_EVERY == 0 {
            info!(season = %season.slug, done = i + 1, total, "players processed");
        }
        tokio::time::sleep(FETCH_PAUSE).await;
    }

    Ok(records)
}

/// Merge the listing-page inference with the profile extraction into the
/// final record. Field priorities: profile name over list name; for the
/// team, list inference over the profile attribute over the fallback scan
/// (the fallback already lives inside `extract_profile`).
pub(crate) fn assemble_record(
    season: &Season,
    link: &PlayerLink,
    player_url: String,
    document: &Html,
    roster: &Roster,
) -> Result<PlayerRecord> {
    let profile = profile::extract_profile(document, roster)?;
    Ok(PlayerRecord {
        season: season.slug.clone(),
        player_name: profile.name.or_else(|| link.name.clone()),
        birth_date: profile.birth_date,
        team: link.team.clone().or(profile.team),
        position: profile.position,
        height_cm: profile.height_cm,
        weight_kg: profile.weight_kg,
        spike_reach_cm: profile.spike_reach_cm,
        jersey_number: profile.jersey_number,
        player_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season() -> Season {
        Season::new("Sezon 2024/2025".to_string(), 55).unwrap()
    }

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| n.to_string()))
    }

    #[test]
    fn assembles_a_full_record_from_list_and_profile() {
        let season = season();
        let roster = roster(&["Team Alpha"]);
        let link = PlayerLink {
            href: "https://www.plusliga.pl/players/id/9/tour/55.html".to_string(),
            team: Some("Team Alpha".to_string()),
            name: Some("Jan Kowalski".to_string()),
        };
        let url = canonical_player_url(&link.href, season.id);
        let document = Html::parse_document(
            r#"<html><body>
                <h1>Jan Kowalski</h1>
                <li>Drużyna: Team Alpha</li>
                <li>Wzrost: 195 cm</li>
            </body></html>"#,
        );

        let record = assemble_record(&season, &link, url, &document, &roster).unwrap();
        assert_eq!(record.season, "2024-2025");
        assert_eq!(record.player_name.as_deref(), Some("Jan Kowalski"));
        assert_eq!(record.team.as_deref(), Some("Team Alpha"));
        assert_eq!(record.height_cm, Some(195));
        assert_eq!(record.weight_kg, None);
        assert_eq!(record.spike_reach_cm, None);
        assert_eq!(record.jersey_number, None);
        assert_eq!(record.birth_date, None);
        assert_eq!(record.position, None);
        assert_eq!(
            record.player_url,
            "https://www.plusliga.pl/players/id/9/tour/55.html"
        );
    }

    #[test]
    fn list_team_outranks_profile_attribute_team() {
        let season = season();
        let roster = roster(&["Team Alpha", "Team Beta"]);
        let link = PlayerLink {
            href: "https://www.plusliga.pl/players/id/9/tour/55.html".to_string(),
            team: Some("Team Alpha".to_string()),
            name: None,
        };
        let document = Html::parse_document(
            r#"<html><body><li>Drużyna: Team Beta</li></body></html>"#,
        );
        let record =
            assemble_record(&season, &link, link.href.clone(), &document, &roster).unwrap();
        assert_eq!(record.team.as_deref(), Some("Team Alpha"));
    }

    #[test]
    fn profile_attribute_team_outranks_fallback_scan() {
        let season = season();
        let roster = roster(&["Team Alpha", "Team Beta"]);
        let link = PlayerLink {
            href: "https://www.plusliga.pl/players/id/9/tour/55.html".to_string(),
            team: None,
            name: None,
        };
        let document = Html::parse_document(
            r#"<html><body>
                <li>Klub: Team Beta</li>
                <a href="/teams/id/1.html">Team Alpha</a>
            </body></html>"#,
        );
        let record =
            assemble_record(&season, &link, link.href.clone(), &document, &roster).unwrap();
        assert_eq!(record.team.as_deref(), Some("Team Beta"));
    }

    #[test]
    fn list_name_backs_up_a_nameless_profile() {
        let season = season();
        let roster = roster(&[]);
        let link = PlayerLink {
            href: "https://www.plusliga.pl/players/id/9/tour/55.html".to_string(),
            team: None,
            name: Some("Adam Nowak".to_string()),
        };
        let document = Html::parse_document("<html><body><p>Brak danych</p></body></html>");
        let record =
            assemble_record(&season, &link, link.href.clone(), &document, &roster).unwrap();
        assert_eq!(record.player_name.as_deref(), Some("Adam Nowak"));
    }
}
