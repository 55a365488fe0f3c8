mod submission;

pub use submission::SubmissionCoordinator;

/// Lifecycle of the kiosk form across one submission attempt.
///
/// Outside of the idle state before the first submit, exactly one of the
/// progress indicator and the result area is visible.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmissionState {
    /// Form interactive, nothing in flight, no result shown yet.
    Idle,
    /// Request in flight: submit disabled, progress shown, result hidden.
    Submitting,
    /// Outcome rendered: progress hidden, result shown, submit re-enabled.
    Completed
}
