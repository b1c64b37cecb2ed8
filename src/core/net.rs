use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{MdClient, MdError};

/// Build `base` + `segments` as a URL, percent-encoding each segment.
///
/// A trailing slash on `base` is treated as a directory: `http://h/api/` + `["news"]`
/// yields `http://h/api/news`.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, MdError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| MdError::InvalidParams(format!("base URL cannot take a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET `url` and return the body text, mapping a non-success status to `MdError::Status`.
pub(crate) async fn get_text(client: &MdClient, url: Url) -> Result<String, MdError> {
    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(MdError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp.text().await?)
}

/// GET `url` and decode the JSON body into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &MdClient, url: Url) -> Result<T, MdError> {
    let body = get_text(client, url).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Trim and reject empty ticker symbols before they reach a URL.
pub(crate) fn clean_symbol(symbol: &str) -> Result<&str, MdError> {
    let s = symbol.trim();
    if s.is_empty() {
        return Err(MdError::InvalidParams("symbol must not be empty".into()));
    }
    Ok(s)
}
