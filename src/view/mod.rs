mod console_view;
#[cfg(test)]
mod tests;

pub use console_view::ConsoleView;

use crate::render::DisplayModel;

/// Rendering-substrate ports the controllers drive.
///
/// The form controller and coordinator depend on this interface rather than
/// concrete screen elements, so the full submission lifecycle can run
/// against a recording double in tests.
pub trait TerminalView {
    /// Shows or hides the amount field.
    fn set_amount_visible(&mut self, visible: bool);
    /// Marks the amount field required for submit.
    fn set_amount_required(&mut self, required: bool);
    /// Enables or disables the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);
    /// Shows or hides the in-flight progress indicator.
    fn set_progress_visible(&mut self, visible: bool);
    /// Replaces the result area content and brings it into view.
    fn show_result(&mut self, model: &DisplayModel);
    /// Hides the result area.
    fn hide_result(&mut self);
}
