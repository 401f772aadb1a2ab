//! Authenticated fetch of the calendar page.

use anyhow::{Context, Result};

use crate::config::Credentials;

/// Fetch the rendered calendar page, logging in through the page's
/// frontend form. Any transport or HTTP failure is fatal; there is no
/// retry and nothing downstream runs after a failed fetch.
pub async fn fetch_calendar_page(url: &str, credentials: &Credentials) -> Result<String> {
    let client = reqwest::Client::new();

    let response = client
        .post(url)
        .form(&[
            ("frontend_login_username", credentials.username.as_str()),
            ("frontend_login_password", credentials.password.as_str()),
        ])
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("Calendar page at {} returned an error", url))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}
