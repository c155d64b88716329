mod player;
mod season;
mod team;

pub use player::*;
pub use season::*;
pub use team::*;
