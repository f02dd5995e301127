/// Fixed configuration constants for the demo
///
/// Everything here is compiled in: the two remote image addresses,
/// the spinner timing, the bundled fallback image, and the window
/// geometry. None of it is externally configurable.

use std::time::Duration;

/// Image address requested on startup (random cars category)
pub const PRIMARY_IMAGE_URL: &str = "https://source.unsplash.com/random/3840x2160/?cars";

/// Image address requested after pressing the toggle button (no category)
pub const TOGGLED_IMAGE_URL: &str = "https://source.unsplash.com/random/3840x2160";

/// Bundled default image, shown before the first fetch completes and
/// whenever a fetch fails
pub const FALLBACK_IMAGE_BYTES: &[u8] = include_bytes!("../assets/default_image.jpg");

/// How long the spinner stays up after a fetch completes.
///
/// Purely cosmetic, so transient loading states stay observable during
/// manual testing. This is not a network timeout.
pub const SPINNER_HOLD: Duration = Duration::from_millis(2000);

/// Interval between spinner animation frames (~30 fps)
pub const SPINNER_FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Window dimensions (portrait, phone-like)
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 640.0;

/// Dimensions of the image area inside the window
pub const IMAGE_AREA_WIDTH: f32 = 340.0;
pub const IMAGE_AREA_HEIGHT: f32 = 260.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_are_absolute_and_distinct() {
        assert!(PRIMARY_IMAGE_URL.starts_with("https://"));
        assert!(TOGGLED_IMAGE_URL.starts_with("https://"));
        assert_ne!(PRIMARY_IMAGE_URL, TOGGLED_IMAGE_URL);
    }

    #[test]
    fn test_toggled_address_has_no_query() {
        assert!(!TOGGLED_IMAGE_URL.contains('?'));
    }

    #[test]
    fn test_fallback_image_is_bundled() {
        // The embedded asset must at least carry the JPEG magic bytes
        assert!(FALLBACK_IMAGE_BYTES.len() > 4);
        assert_eq!(FALLBACK_IMAGE_BYTES[..2], [0xff, 0xd8]);
    }
}
