use tracing::debug;

use crate::models::TransactionType;
use crate::view::TerminalView;

/// Keeps the amount field in step with the selected transaction type.
pub struct FormController;

impl FormController {
    /// Applies the type-dependent field rules.
    ///
    /// Withdrawals need an amount, so the field becomes visible and
    /// required; for anything else it is hidden and optional. The field's
    /// current value is left untouched; a stale value is simply ignored
    /// when the request is built.
    pub fn on_type_changed<V: TerminalView>(view: &mut V, selected: TransactionType) {
        let needs_amount = selected == TransactionType::Withdrawal;

        view.set_amount_visible(needs_amount);
        view.set_amount_required(needs_amount);

        debug!("Amount field {} for [{selected:?}]", if needs_amount { "shown" } else { "hidden" });
    }
}
