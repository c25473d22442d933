// src/core/net.rs

// HTTPS GET for the feed, caching disabled end to end. Published
// sheets sit behind CDNs that happily serve stale CSV, so every
// cycle asks for a fresh body.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FeedError;

pub fn fetch_text(url: &str) -> Result<String, FeedError> {
    let client = Client::builder()
        .user_agent(concat!("bracket_board/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .connect_timeout(Duration::from_secs(15))
        .build()?;

    let res = client
        .get(url)
        .header("Cache-Control", "no-store")
        .header("Pragma", "no-cache")
        .send()?;

    let status = res.status();
    if !status.is_success() {
        return Err(FeedError::Http(status.as_u16()));
    }
    Ok(res.text()?)
}
