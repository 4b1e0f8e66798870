use crate::config::AppConfig;
use crate::error::TransformError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scraper::Html;
use std::time::Duration;

/// Fetch a URL and parse the response body as an HTML document
pub fn fetch_document(url: &str, config: &AppConfig) -> Result<Html, TransformError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;

    debug!("fetching {}", url);
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(Html::parse_document(&body))
}
