use super::FormController;

use crate::models::TransactionType;
use crate::render::DisplayModel;
use crate::view::TerminalView;

#[derive(Default)]
struct FlagView {
    amount_visible: bool,
    amount_required: bool
}

impl TerminalView for FlagView {
    fn set_amount_visible(&mut self, visible: bool) {
        self.amount_visible = visible;
    }

    fn set_amount_required(&mut self, required: bool) {
        self.amount_required = required;
    }

    fn set_submit_enabled(&mut self, _enabled: bool) {}

    fn set_progress_visible(&mut self, _visible: bool) {}

    fn show_result(&mut self, _model: &DisplayModel) {}

    fn hide_result(&mut self) {}
}

#[test]
fn test_withdrawal_shows_and_requires_amount_field() {
    let mut view = FlagView::default();

    FormController::on_type_changed(&mut view, TransactionType::Withdrawal);

    assert!(view.amount_visible);
    assert!(view.amount_required);
}

#[test]
fn test_balance_hides_amount_field_and_clears_requiredness() {
    let mut view = FlagView::default();

    FormController::on_type_changed(&mut view, TransactionType::Withdrawal);
    FormController::on_type_changed(&mut view, TransactionType::Balance);

    assert!(!view.amount_visible);
    assert!(!view.amount_required);
}

#[test]
fn test_repeated_toggling_lands_on_last_selection() {
    let mut view = FlagView::default();

    for _ in 0..3 {
        FormController::on_type_changed(&mut view, TransactionType::Withdrawal);
        FormController::on_type_changed(&mut view, TransactionType::Balance);
    }

    FormController::on_type_changed(&mut view, TransactionType::Withdrawal);

    assert!(view.amount_visible);
    assert!(view.amount_required);
}
