use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use std::time::Duration;
use url::Url;

/// Validate that an address is a well-formed absolute http(s) URL
pub fn validate_address(address: &str) -> Result<Url, AnalyzeError> {
    let url =
        Url::parse(address).map_err(|_| AnalyzeError::InvalidAddress(address.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AnalyzeError::InvalidAddress(address.to_string()));
    }
    if url.host_str().is_none() {
        return Err(AnalyzeError::InvalidAddress(address.to_string()));
    }

    Ok(url)
}

/// Fetch the raw markup for a validated address.
///
/// Issues a single GET with an identifying User-Agent. No retries;
/// redirects are left to the client's default policy. The body read is
/// capped at `max_body_bytes`; anything beyond the cap is discarded.
pub async fn fetch_document(url: &Url, config: &AnalyzerConfig) -> Result<String, AnalyzeError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    ::log::debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .header(reqwest::header::USER_AGENT, &config.user_agent)
        .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AnalyzeError::FetchFailure {
            status: status.as_u16(),
        });
    }

    read_text_limited(response, config.max_body_bytes).await
}

/// Read a response body up to a byte limit, truncating past it
async fn read_text_limited(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<String, AnalyzeError> {
    let mut out: Vec<u8> = Vec::new();

    while let Some(chunk) = response.chunk().await? {
        if out.len() + chunk.len() > limit {
            let remaining = limit.saturating_sub(out.len());
            out.extend_from_slice(&chunk[..remaining]);
            ::log::debug!("Response body truncated at {} bytes", limit);
            break;
        }
        out.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}
