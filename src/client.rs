use std::time::Duration;

use tracing::instrument;

use crate::error::{PlusLigaError, Result};
use crate::model::*;
use crate::scraper;

/// Request headers the site expects; without a browser-like user agent
/// some older season pages answer with an error page.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const TIMEOUT: Duration = Duration::from_secs(25);

/// The main entry point for interacting with plusliga.pl.
///
/// `PlusLigaClient` wraps a [`reqwest::Client`] and exposes one method per
/// pipeline stage: season catalog, per-season roster, per-season player
/// list, and the assembled per-season records.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> plusliga_scraper::Result<()> {
/// use plusliga_scraper::PlusLigaClient;
///
/// let client = PlusLigaClient::new()?;
/// for season in client.get_seasons().await? {
///     let records = client.scrape_season(&season).await?;
///     println!("{}: {} players", season.slug, records.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PlusLigaClient {
    http: reqwest::Client,
}

impl PlusLigaClient {
    /// Create a new client with the site's expected headers and timeout.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(PlusLigaError::ClientBuild)?;
        Ok(Self { http })
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, extra headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Discover all seasons from the teams index page, oldest first.
    ///
    /// Fails with [`PlusLigaError::NoSeasonsFound`] when the index yields
    /// nothing; no other operation can run without a catalog.
    #[instrument(skip(self))]
    pub async fn get_seasons(&self) -> Result<Vec<Season>> {
        scraper::seasons::get_seasons(&self.http).await
    }

    /// Fetch the authoritative team-name set for a season. All team
    /// inference downstream resolves against this roster.
    #[instrument(skip(self))]
    pub async fn get_season_roster(&self, season_id: u32) -> Result<Roster> {
        scraper::teams::get_season_roster(&self.http, season_id).await
    }

    /// Scan a season's "players by team" listing into deduplicated
    /// provisional player links with inferred teams.
    #[instrument(skip(self, roster))]
    pub async fn get_player_links(
        &self,
        season_id: u32,
        roster: &Roster,
    ) -> Result<Vec<PlayerLink>> {
        scraper::players::get_player_links(&self.http, season_id, roster).await
    }

    /// Scrape one season end to end into final player records. Sequential
    /// and rate-limited; individual profile failures are logged and
    /// skipped.
    #[instrument(skip(self, season), fields(season = %season.slug))]
    pub async fn scrape_season(&self, season: &Season) -> Result<Vec<PlayerRecord>> {
        scraper::records::scrape_season(&self.http, season).await
    }
}
