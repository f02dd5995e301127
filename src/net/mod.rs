/// Remote image access module
///
/// This module handles:
/// - Fetching one image per assigned address over HTTPS
/// - Decoding response bytes into displayable handles
/// - Decoding the bundled fallback image

pub mod fetch;

pub use fetch::{fetch_image, FetchError};
