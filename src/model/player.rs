use serde::Serialize;

/// A provisional player reference discovered on a "players by team"
/// listing page. Unconfirmed until the profile page is fetched.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerLink {
    /// Absolute href with any fragment stripped; the dedup key.
    pub href: String,
    /// Team inferred from the most recent team heading in document order.
    pub team: Option<String>,
    /// Visible text of the link, when non-empty.
    pub name: Option<String>,
}

/// Attributes extracted from a player profile page. Everything is
/// optional; profile markup varies a lot across seasons.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerProfile {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub spike_reach_cm: Option<u32>,
    pub jersey_number: Option<u32>,
}

/// One output row: a player within a season. Field order is the CSV
/// column order. Emitted once, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub season: String,
    pub player_name: Option<String>,
    pub birth_date: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub spike_reach_cm: Option<u32>,
    pub jersey_number: Option<u32>,
    pub player_url: String,
}
