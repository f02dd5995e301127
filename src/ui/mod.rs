/// UI widgets
///
/// Custom widgets that the main view composes:
/// - `spinner.rs` - canvas-drawn activity indicator for the loading overlay

pub mod spinner;

pub use spinner::Spinner;
