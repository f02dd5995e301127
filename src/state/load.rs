/// Load-attempt state machine
///
/// Tracks the three pieces of view state behind the demo screen:
/// whether a fetch is outstanding, which address is being fetched,
/// and whether the most recent attempt failed.
///
/// Each attempt gets a monotonically increasing generation number.
/// The delayed spinner dismissal and the fetch completion both carry
/// the generation of the attempt they belong to, so a callback from a
/// superseded attempt can never clobber the state of a newer one.

use crate::config;

/// Identifies one load attempt. Handed to every deferred callback
/// spawned for that attempt.
pub type Generation = u64;

/// View state for the image loader screen
#[derive(Debug, Clone)]
pub struct LoadState {
    /// Counter of the current (most recent) load attempt
    generation: Generation,
    /// Whether a fetch attempt is currently outstanding
    is_loading: bool,
    /// Whether the most recent attempt failed
    error: bool,
    /// The address currently requested
    image_uri: String,
}

impl LoadState {
    /// State at mount: the first attempt against the primary address
    /// is already underway.
    pub fn new() -> Self {
        LoadState {
            generation: 1,
            is_loading: true,
            error: false,
            image_uri: config::PRIMARY_IMAGE_URL.to_owned(),
        }
    }

    /// Begin a new load attempt against `uri`.
    ///
    /// Raises the loading flag, clears the error flag immediately, and
    /// returns the new attempt's generation. Any deferred callback still
    /// pending from an earlier attempt becomes stale at this point.
    pub fn start_attempt(&mut self, uri: &str) -> Generation {
        self.generation += 1;
        self.is_loading = true;
        self.error = false;
        self.image_uri = uri.to_owned();
        self.generation
    }

    /// The current attempt finished successfully.
    ///
    /// The error flag is left unchanged; the loading flag stays up until
    /// the delayed dismissal for the returned generation fires.
    pub fn finish_attempt(&self) -> Generation {
        self.generation
    }

    /// The current attempt failed.
    ///
    /// The error flag is set synchronously; the loading flag stays up
    /// until the delayed dismissal for the returned generation fires.
    pub fn fail_attempt(&mut self) -> Generation {
        self.error = true;
        self.generation
    }

    /// Delayed spinner dismissal for the attempt with `generation`.
    ///
    /// Clears the loading flag only if that attempt is still the current
    /// one. Returns false (and changes nothing) for a stale timer whose
    /// attempt has been superseded by a newer start.
    pub fn dismiss_spinner(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        self.is_loading = false;
        true
    }

    /// Whether `generation` still identifies the current attempt
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Generation of the current attempt
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> bool {
        self.error
    }

    pub fn image_uri(&self) -> &str {
        &self.image_uri
    }

    /// Status line shown under the image.
    ///
    /// Loading takes precedence over the error flag: while a failed
    /// attempt's spinner is still held, the screen keeps reporting
    /// loading.
    pub fn status_text(&self) -> &'static str {
        if self.is_loading {
            "Image Loading..."
        } else if self.error {
            "Error Occur, Showing Default Image"
        } else {
            "Image Loaded"
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hold the spinner up for the configured delay, then yield the
/// generation so the caller can dismiss it.
///
/// Fetch completion and spinner dismissal stay two independent events:
/// this future is spawned when a fetch completes, and the dismissal it
/// triggers is ignored if a newer attempt started in the meantime.
pub async fn spinner_hold(generation: Generation) -> Generation {
    tokio::time::sleep(config::SPINNER_HOLD).await;
    generation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = LoadState::new();

        assert!(state.is_loading());
        assert!(!state.error());
        assert_eq!(state.image_uri(), config::PRIMARY_IMAGE_URL);
        assert_eq!(state.status_text(), "Image Loading...");
    }

    #[test]
    fn test_start_resets_error() {
        let mut state = LoadState::new();
        let generation = state.fail_attempt();
        state.dismiss_spinner(generation);
        assert!(state.error());

        state.start_attempt(config::TOGGLED_IMAGE_URL);

        // Cleared immediately, before any delayed dismissal
        assert!(!state.error());
        assert!(state.is_loading());
    }

    #[test]
    fn test_success_path() {
        let mut state = LoadState::new();
        let generation = state.finish_attempt();

        // Until the delayed dismissal fires, the spinner stays up
        assert!(state.is_loading());
        assert_eq!(state.status_text(), "Image Loading...");

        assert!(state.dismiss_spinner(generation));
        assert!(!state.is_loading());
        assert!(!state.error());
        assert_eq!(state.status_text(), "Image Loaded");
    }

    #[test]
    fn test_error_sets_flag_immediately() {
        let mut state = LoadState::new();
        let generation = state.fail_attempt();

        // Error flag flips synchronously, loading flag only after the delay
        assert!(state.error());
        assert!(state.is_loading());
        assert_eq!(state.status_text(), "Image Loading...");

        state.dismiss_spinner(generation);
        assert_eq!(state.status_text(), "Error Occur, Showing Default Image");
    }

    #[test]
    fn test_toggle_changes_address_and_reenters_loading() {
        let mut state = LoadState::new();
        let generation = state.finish_attempt();
        state.dismiss_spinner(generation);
        assert_eq!(state.status_text(), "Image Loaded");

        state.start_attempt(config::TOGGLED_IMAGE_URL);

        assert_eq!(state.image_uri(), config::TOGGLED_IMAGE_URL);
        assert_ne!(config::TOGGLED_IMAGE_URL, config::PRIMARY_IMAGE_URL);
        assert!(state.is_loading());
    }

    #[test]
    fn test_stale_dismiss_does_not_clear_newer_attempt() {
        let mut state = LoadState::new();

        // Attempt A completes, its dismissal is pending
        let timer_a = state.finish_attempt();

        // Attempt B starts before A's timer fires
        let generation_b = state.start_attempt(config::TOGGLED_IMAGE_URL);

        // A's timer fires late: it must not clear the loading flag of B
        assert!(!state.dismiss_spinner(timer_a));
        assert!(state.is_loading());

        // B's own dismissal still works
        assert!(state.dismiss_spinner(generation_b));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_fetch_result_detection() {
        let mut state = LoadState::new();
        let generation_a = state.finish_attempt();
        assert!(state.is_current(generation_a));

        let generation_b = state.start_attempt(config::TOGGLED_IMAGE_URL);
        assert!(!state.is_current(generation_a));
        assert!(state.is_current(generation_b));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spinner_hold_lasts_the_configured_delay() {
        let start = tokio::time::Instant::now();
        let generation = spinner_hold(7).await;

        assert_eq!(generation, 7);
        assert!(start.elapsed() >= config::SPINNER_HOLD);
    }
}
