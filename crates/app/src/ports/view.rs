//! View port — where the dashboard state is drawn.

use sitewatch_domain::board::Board;

/// Rendering surface driven by the controller.
///
/// Every render is a full replacement of the previous one.
pub trait DashboardView {
    /// Replace both lists with the contents of `board`.
    fn render(&self, board: &Board);

    /// Disable (and relabel) the check-all control while `busy`, restore it otherwise.
    fn set_check_all_busy(&self, busy: bool);

    /// Clear the add-website form and collapse its PKI section.
    fn reset_add_form(&self);
}

impl<T: DashboardView> DashboardView for std::sync::Arc<T> {
    fn render(&self, board: &Board) {
        (**self).render(board);
    }

    fn set_check_all_busy(&self, busy: bool) {
        (**self).set_check_all_busy(busy);
    }

    fn reset_add_form(&self) {
        (**self).reset_add_form();
    }
}
