mod result_renderer;

pub use result_renderer::ResultRenderer;

/// Pass/fail classification the rendering substrate styles on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutcomeCategory {
    Success,
    Failure
}

/// What the view shows for a completed submission.
#[derive(Debug, Clone)]
pub struct DisplayModel {
    pub category: OutcomeCategory,
    pub headline: String,
    pub detail_lines: Vec<String>
}
