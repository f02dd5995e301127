/// State management module
///
/// This module owns the view state behind the demo screen:
/// - The load-attempt state machine and its generation counter (load.rs)
/// - The delayed spinner dismissal tied to each attempt (load.rs)

pub mod load;

pub use load::{Generation, LoadState};
