use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::PlayerRecord;

const COLUMNS: [&str; 10] = [
    "season",
    "player_name",
    "birth_date",
    "team",
    "position",
    "height_cm",
    "weight_kg",
    "spike_reach_cm",
    "jersey_number",
    "player_url",
];

/// Write records as CSV to `path`, creating missing parent directories.
///
/// Column order follows the `PlayerRecord` field order: season,
/// player_name, birth_date, team, position, height_cm, weight_kg,
/// spike_reach_cm, jersey_number, player_url. Missing values become empty
/// fields.
pub fn write_records(records: &[PlayerRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    if records.is_empty() {
        // serde only emits the header alongside the first row; an empty
        // season still gets a well-formed file.
        writer.write_record(COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}

/// Write a single-column CSV of team names, creating missing parent
/// directories. Used for the cross-season unique-team listing.
pub fn write_team_names(names: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["team"])?;
    for name in names {
        writer.write_record([name.as_str()])?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = names.len(), "wrote csv");
    Ok(())
}
