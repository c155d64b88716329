pub(crate) mod players;
pub(crate) mod profile;
pub(crate) mod records;
pub(crate) mod seasons;
pub(crate) mod teams;
pub(crate) mod urls;

use ::scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{PlusLigaError, Result};

pub(crate) const BASE_URL: &str = "https://www.plusliga.pl";

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PlusLigaError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PlusLigaError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| PlusLigaError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// All text content of an element, whitespace-normalized.
pub(crate) fn element_text(element: &ElementRef) -> String {
    crate::text::normalize(&element.text().collect::<Vec<_>>().join(" "))
}
