use anyhow::{Context, Error, Result};
use reqwest::Client;

pub fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")
}

pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let res = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await.context("Failed to read response body")?;

    Ok(text)
}
