use super::{ConsoleView, TerminalView};

#[test]
fn test_console_view_starts_interactive_with_amount_hidden() {
    let view = ConsoleView::new();

    assert!(view.submit_enabled());
    assert!(!view.amount_visible());
    assert!(!view.amount_required());
}

#[test]
fn test_console_view_tracks_field_and_control_flags() {
    let mut view = ConsoleView::new();

    view.set_amount_visible(true);
    view.set_amount_required(true);
    view.set_submit_enabled(false);

    assert!(view.amount_visible());
    assert!(view.amount_required());
    assert!(!view.submit_enabled());
}
