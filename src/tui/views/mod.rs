//! TUI Views module
//!
//! The register (header and transaction table), the summary panel and the
//! status bar, with any open dialog drawn on top.

pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::storage::KeyValueStorage;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
///
/// The ledger is projected once per frame; every panel reads from the same
/// view.
pub fn render<S: KeyValueStorage>(frame: &mut Frame, app: &mut App<S>) {
    let layout = AppLayout::new(frame.area());
    let view = app.ledger.render();

    app.selected_index = app
        .selected_index
        .min(view.list.row_count().saturating_sub(1));

    register::render_header(frame, layout.header);
    register::render_list(frame, &view.list, app.selected_index, layout.list);
    summary::render(frame, &view, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, &app.transaction_form),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, action),
        ActiveDialog::None => {}
    }
}
