use crate::render::{DisplayModel, OutcomeCategory};
use crate::view::TerminalView;

/// Console rendering of the kiosk screen.
///
/// Field visibility, requiredness, and the submit control are plain flags
/// the prompt loop consults before asking for input; progress and results
/// print straight to stdout.
pub struct ConsoleView {
    amount_visible: bool,
    amount_required: bool,
    submit_enabled: bool
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            amount_visible: false,
            amount_required: false,
            submit_enabled: true
        }
    }

    pub fn amount_visible(&self) -> bool {
        self.amount_visible
    }

    pub fn amount_required(&self) -> bool {
        self.amount_required
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }
}

impl TerminalView for ConsoleView {
    fn set_amount_visible(&mut self, visible: bool) {
        self.amount_visible = visible;
    }

    fn set_amount_required(&mut self, required: bool) {
        self.amount_required = required;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_progress_visible(&mut self, visible: bool) {
        if visible {
            println!("Processing transaction...");
        }
    }

    fn show_result(&mut self, model: &DisplayModel) {
        let marker = match model.category {
            OutcomeCategory::Success => "OK",
            OutcomeCategory::Failure => "FAILED"
        };

        println!();
        println!("[{}] {}", marker, model.headline);

        for line in &model.detail_lines {
            println!("  {line}");
        }

        println!();
    }

    fn hide_result(&mut self) {
        //NOTE: Previous results simply scroll away on a console.
    }
}
