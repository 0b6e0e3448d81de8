//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process actions and mutate app state accordingly.
//! - Discard fetch completions that were superseded by a newer request.
//! - Queue follow-up fetches after mutations and page clamps.
//!
//! Non-responsibilities:
//! - Creating actions from input (see `app::input`).
//! - Performing async operations (see `runtime::side_effects`).

use crate::action::Action;
use crate::app::{App, ConnectionHealth, Popup};
use crate::ui::toast::{self, Toast};

impl App {
    /// Pure state mutation based on an action.
    ///
    /// Fetch commands were already applied to controller state when the
    /// action was built, so they are no-ops here.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1) % 8;
                toast::prune(&mut self.toasts);
            }
            Action::Quit => {
                self.should_quit = true;
            }

            Action::InventoryLoaded { seq, result } => {
                if !self.inventory.accepts(seq) {
                    tracing::debug!(seq, "discarding superseded inventory response");
                    return;
                }
                match result {
                    Ok(page) => {
                        if self.inventory.apply_page(page.items, page.total_items) {
                            // The page we asked for no longer exists; fetch
                            // the clamped one.
                            let refetch = self.reload_inventory();
                            self.pending.push(refetch);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "inventory fetch failed");
                        self.inventory.apply_error(e.inline_message());
                    }
                }
            }

            Action::LogsLoaded { seq, result } => {
                if !self.logs.accepts(seq) {
                    tracing::debug!(seq, "discarding superseded log response");
                    return;
                }
                match result {
                    Ok(page) => {
                        if self.logs.apply_page(page.logs, page.total_items) {
                            let refetch = self.reload_logs();
                            self.pending.push(refetch);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "operation log fetch failed");
                        self.logs.apply_error(e.inline_message());
                    }
                }
            }

            Action::ItemDetailLoaded(Ok(detail)) => {
                self.popup = Some(Popup::Edit(super::EditForm::for_item(&detail)));
            }
            Action::ItemDetailLoaded(Err(e)) => {
                self.push_toast(Toast::error(e.inline_message()));
            }

            Action::StatusLoaded(result) => {
                self.connection = match result {
                    Ok(status) if status.is_connected() => ConnectionHealth::Connected,
                    Ok(status) => ConnectionHealth::Disconnected(status.describe()),
                    Err(e) => ConnectionHealth::Unreachable(e.inline_message()),
                };
            }

            Action::ItemUpdated(Ok(())) => {
                self.popup = None;
                self.push_toast(Toast::success("Item updated"));
                let refetch = self.reload_inventory();
                self.pending.push(refetch);
            }
            Action::ItemUpdated(Err(e)) => {
                self.mutation_failed(e.inline_message());
            }

            Action::ItemDeleted(Ok(())) => {
                self.popup = None;
                self.push_toast(Toast::success("Item deleted"));
                let refetch = self.reload_inventory();
                self.pending.push(refetch);
            }
            Action::ItemDeleted(Err(e)) => {
                self.mutation_failed(e.inline_message());
            }

            // Commands consumed by the side effect layer; controller state
            // was set when the command was built.
            Action::LoadInventory { .. }
            | Action::LoadLogs { .. }
            | Action::LoadItemDetail { .. }
            | Action::CheckStatus
            | Action::SubmitUpdate { .. }
            | Action::SubmitDelete { .. } => {}

            // Resolved to a concrete action by the event loop before update.
            Action::Input(_) => {}
        }
    }

    /// Surface a failed mutation inside the open popup, or as a toast if the
    /// popup is already gone.
    fn mutation_failed(&mut self, message: String) {
        match &mut self.popup {
            Some(Popup::Edit(form)) => {
                form.submitting = false;
                form.error = Some(message);
            }
            Some(Popup::Delete(prompt)) => {
                prompt.submitting = false;
                prompt.error = Some(message);
            }
            None => self.push_toast(Toast::error(message)),
        }
    }
}
