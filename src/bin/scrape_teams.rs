use std::path::Path;

use plusliga_scraper::model::Roster;
use plusliga_scraper::{export, PlusLigaClient};

const OUT_PATH: &str = "data/raw/plusliga_teams_unique.csv";

#[tokio::main]
async fn main() -> plusliga_scraper::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = PlusLigaClient::new()?;
    let seasons = client.get_seasons().await?;
    println!("Found {} seasons", seasons.len());

    let mut all_names = Vec::new();
    for (i, season) in seasons.iter().enumerate() {
        println!(
            "[{}/{}] {} (tour={})",
            i + 1,
            seasons.len(),
            season.display_text,
            season.id
        );
        let roster = client.get_season_roster(season.id).await?;
        all_names.extend(roster.names().map(str::to_string));
    }

    // Rosters are season-scoped; merging through a fresh Roster dedupes
    // name variants across seasons the same way single-season matching does.
    let merged = Roster::new(all_names);
    let mut names: Vec<String> = merged.names().map(str::to_string).collect();
    names.sort_by_key(|n| n.to_lowercase());

    println!("Total unique teams: {}", names.len());
    for name in &names {
        println!("- {name}");
    }

    export::write_team_names(&names, Path::new(OUT_PATH))?;
    println!("Wrote {} teams to {OUT_PATH}", names.len());
    Ok(())
}
