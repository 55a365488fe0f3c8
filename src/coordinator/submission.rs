use tracing::{debug, warn};

use crate::clock::{elapsed_seconds, Clock};
use crate::coordinator::SubmissionState;
use crate::gateway::TransactionGateway;
use crate::models::{FormSnapshot, Outcome, TransactionRequest};
use crate::render::{DisplayModel, ResultRenderer};
use crate::view::TerminalView;

/// Drives one submission attempt end to end.
///
/// The coordinator owns the only state that outlives a submission, the
/// `SubmissionState`, and is its only writer. The gateway call is the
/// single suspension point; `submit` takes `&mut self`, so a second
/// attempt cannot interleave with one in flight, and the disabled submit
/// control enforces the same at the screen.
pub struct SubmissionCoordinator<G, V, C> {
    gateway: G,
    view: V,
    clock: C,
    state: SubmissionState
}

impl<G: TransactionGateway, V: TerminalView, C: Clock> SubmissionCoordinator<G, V, C> {
    pub fn new(gateway: G, view: V, clock: C) -> Self {
        Self {
            gateway,
            view,
            clock,
            state: SubmissionState::Idle
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Runs a full submission attempt against the given form snapshot.
    ///
    /// Every branch, approval, decline, and transport fault, converges on
    /// the same completion path: progress hidden, result shown, submit
    /// control re-enabled for the next attempt. Failures arrive as values
    /// rather than unwinds, so the release is structural. No retry, no
    /// timeout, no cancellation once the call is issued.
    pub async fn submit(&mut self, snapshot: FormSnapshot) {
        if self.state == SubmissionState::Submitting {
            warn!("Submit ignored, a submission is already in flight");
            return;
        }

        let request = TransactionRequest::from_snapshot(&snapshot);

        self.enter_submitting();

        let started = self.clock.now();
        let result = self.gateway.submit(&request).await;
        let ended = self.clock.now();

        let outcome = match result {
            Ok(response) => Outcome::from_response(response),
            Err(error) => Outcome::TransportFailure { message: error.to_string() }
        };

        match &outcome {
            Outcome::Success { code, .. } => debug!("Transaction approved with code [{code}]"),
            Outcome::BusinessFailure { code, .. } => warn!("Transaction declined with code [{code}]"),
            Outcome::TransportFailure { message } => warn!("Transaction call failed: {message}")
        }

        let model = ResultRenderer::render(&outcome, elapsed_seconds(started, ended), ended);

        self.complete(&model);
    }

    fn enter_submitting(&mut self) {
        self.view.set_submit_enabled(false);
        self.view.hide_result();
        self.view.set_progress_visible(true);
        self.state = SubmissionState::Submitting;
    }

    fn complete(&mut self, model: &DisplayModel) {
        self.view.set_progress_visible(false);
        self.view.show_result(model);
        self.view.set_submit_enabled(true);
        self.state = SubmissionState::Completed;
    }
}
