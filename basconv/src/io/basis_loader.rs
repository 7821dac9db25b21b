//! Basis set loading utilities

use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Read Gaussian94 text from a local file
pub fn read_basis_file(path: &Path) -> Result<String> {
    debug!("Reading basis set file {}", path.display());
    fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read basis set file: {}", path.display()))
}

/// Build the Basis Set Exchange url for a basis set in Gaussian94 format.
/// An empty element list asks for every element the basis covers.
pub fn exchange_url(base_url: &str, name: &str, elements: &[String]) -> String {
    let mut url = format!(
        "{}/api/basis/{}/format/gaussian94/",
        base_url.trim_end_matches('/'),
        name.to_lowercase()
    );
    if !elements.is_empty() {
        url.push_str("?elements=");
        url.push_str(&elements.join(","));
    }
    url
}

/// Download Gaussian94 text from the Basis Set Exchange
pub fn fetch_basis(
    base_url: &str,
    name: &str,
    elements: &[String],
    timeout: Duration,
) -> Result<String> {
    let url = exchange_url(base_url, name, elements);
    debug!("Fetching basis set from {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .wrap_err("Failed to build HTTP client")?;
    let response = client
        .get(&url)
        .send()
        .wrap_err_with(|| format!("Failed to fetch basis set {}", name))?
        .error_for_status()
        .wrap_err_with(|| format!("Basis Set Exchange refused basis set {}", name))?;
    let text = response
        .text()
        .wrap_err("Failed to get response text from basis set API")?;
    debug!("Got response text, length: {}", text.len());
    Ok(text)
}
