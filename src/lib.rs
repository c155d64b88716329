pub use client::PlusLigaClient;
pub use error::{PlusLigaError, Result};

mod client;
pub mod error;
pub mod export;
pub mod labels;
pub mod model;
pub(crate) mod scraper;
pub(crate) mod text;
