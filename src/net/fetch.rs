/// Remote image fetching
///
/// This module plays the image-loading collaborator for the screen:
/// given an address it performs exactly one fetch-and-decode cycle and
/// reports either a displayable handle or a failure. No caching, no
/// retries.

use iced::widget::image::Handle;
use thiserror::Error;

/// Why a load attempt failed
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The response body was not a decodable image
    #[error("could not decode image data: {0}")]
    Decode(String),
}

/// Fetch `uri` and decode the body into an image handle.
///
/// Any non-2xx status is a failure, and the body is decoded up front so
/// that an error page or truncated payload surfaces here instead of
/// rendering as a broken image.
pub async fn fetch_image(uri: &str) -> Result<Handle, FetchError> {
    // Explicit redirect policy and user agent, since the demo endpoints
    // answer with redirects to a CDN
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("image-loader/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let response = client
        .get(uri)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    log::debug!("fetched {} bytes from {}", bytes.len(), uri);

    decode_bytes(&bytes)
}

/// Decode raw body bytes into an RGBA image handle
fn decode_bytes(bytes: &[u8]) -> Result<Handle, FetchError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!("decoded image: {}x{}", width, height);

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Decode the bundled fallback image.
///
/// The asset is embedded in the binary, so failure here means a broken
/// build rather than a runtime condition.
pub fn decode_fallback(bytes: &'static [u8]) -> Result<Handle, FetchError> {
    decode_bytes(bytes)
}
