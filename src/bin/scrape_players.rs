use std::path::PathBuf;

use plusliga_scraper::{export, PlusLigaClient};

const OUT_DIR: &str = "data/raw";

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

    let out_dir = PathBuf::from(OUT_DIR);
    let mut all_records = Vec::new();
    for (i, season) in seasons.iter().enumerate() {
        println!(
            "[{}/{}] {} (tour={})",
            i + 1,
            seasons.len(),
            season.display_text,
            season.id
        );
        let records = client.scrape_season(season).await?;
        println!("  -> {} players extracted", records.len());

        let path = out_dir.join(format!("players_{}.csv", season.slug));
        export::write_records(&records, &path)?;
        all_records.extend(records);
    }

    let aggregate = out_dir.join("players_all_seasons.csv");
    export::write_records(&all_records, &aggregate)?;
    println!(
        "Wrote {} records across {} seasons to {}",
        all_records.len(),
        seasons.len(),
        aggregate.display()
    );
    Ok(())
}
