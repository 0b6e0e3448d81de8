//! Key event resolution.
//!
//! Responsibilities:
//! - Turn raw key events into actions, routing first to any open popup,
//!   then to the search box, then to the global keymap.
//!
//! Invariants:
//! - Invalid popup forms never produce a mutation action; validation errors
//!   stay local to the form.
//! - Only key press events are handled; repeats and releases are ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::action::Action;
use crate::app::{App, Popup, View};

impl App {
    /// Resolve a key event into at most one action, mutating local UI state
    /// (focus, selection, form fields) along the way.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.popup.is_some() {
            return self.handle_popup_key(key);
        }
        if self.search_active {
            return self.handle_search_key(key);
        }
        self.handle_global_key(key)
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Option<Action> {
        let popup = self.popup.as_mut()?;
        match popup {
            Popup::Edit(form) => {
                if form.submitting {
                    return None;
                }
                match key.code {
                    KeyCode::Esc => {
                        self.popup = None;
                        None
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        form.focus_next();
                        None
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        form.focus_prev();
                        None
                    }
                    KeyCode::Enter => match form.validate() {
                        Ok(update) => {
                            form.submitting = true;
                            form.error = None;
                            Some(Action::SubmitUpdate {
                                id: form.inventory_id,
                                update,
                            })
                        }
                        Err(message) => {
                            form.error = Some(message);
                            None
                        }
                    },
                    _ => {
                        form.focused_input_mut().handle_event(&Event::Key(key));
                        None
                    }
                }
            }
            Popup::Delete(prompt) => {
                if prompt.submitting {
                    return None;
                }
                match key.code {
                    KeyCode::Esc => {
                        self.popup = None;
                        None
                    }
                    KeyCode::Enter => match prompt.validate() {
                        Ok(reason) => {
                            prompt.submitting = true;
                            prompt.error = None;
                            Some(Action::SubmitDelete {
                                id: prompt.inventory_id,
                                reason,
                            })
                        }
                        Err(message) => {
                            prompt.error = Some(message);
                            None
                        }
                    },
                    _ => {
                        prompt.reason.handle_event(&Event::Key(key));
                        None
                    }
                }
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                // Abandon the draft; the applied term stays in effect.
                self.search_active = false;
                None
            }
            KeyCode::Enter => {
                self.search_active = false;
                let term = self.search.value().to_string();
                match self.view {
                    View::Inventory => self.inventory.query.apply_search(&term),
                    View::Logs => self.logs.query.apply_search(&term),
                };
                Some(self.reload_active())
            }
            _ => {
                self.search.handle_event(&Event::Key(key));
                None
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),

            KeyCode::Tab => self.switch_view(match self.view {
                View::Inventory => View::Logs,
                View::Logs => View::Inventory,
            }),
            KeyCode::Char('1') => self.switch_view(View::Inventory),
            KeyCode::Char('2') => self.switch_view(View::Logs),

            KeyCode::Char('/') => {
                // Seed the draft with the currently applied term.
                self.search = tui_input::Input::new(self.active_search().to_string());
                self.search_active = true;
                None
            }
            KeyCode::Char('r') => Some(self.reload_active()),
            KeyCode::Char('c') => Some(Action::CheckStatus),

            KeyCode::Left | KeyCode::Char('h') => {
                let moved = match self.view {
                    View::Inventory => self.inventory.query.prev_page(),
                    View::Logs => self.logs.query.prev_page(),
                };
                moved.then(|| self.reload_active())
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let moved = match self.view {
                    View::Inventory => self.inventory.query.next_page(),
                    View::Logs => self.logs.query.next_page(),
                };
                moved.then(|| self.reload_active())
            }

            KeyCode::Char('+') | KeyCode::Char('=') => {
                let changed = match self.view {
                    View::Inventory => self.inventory.query.cycle_page_size(true),
                    View::Logs => self.logs.query.cycle_page_size(true),
                };
                changed.then(|| self.reload_active())
            }
            KeyCode::Char('-') => {
                let changed = match self.view {
                    View::Inventory => self.inventory.query.cycle_page_size(false),
                    View::Logs => self.logs.query.cycle_page_size(false),
                };
                changed.then(|| self.reload_active())
            }

            KeyCode::Down | KeyCode::Char('j') => {
                match self.view {
                    View::Inventory => self.inventory.select_next(),
                    View::Logs => self.logs.select_next(),
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                match self.view {
                    View::Inventory => self.inventory.select_prev(),
                    View::Logs => self.logs.select_prev(),
                }
                None
            }

            KeyCode::Char('e') if self.view == View::Inventory => {
                let id = self.inventory.selected()?.id;
                Some(Action::LoadItemDetail { id })
            }
            KeyCode::Char('d') if self.view == View::Inventory => {
                let row = self.inventory.selected()?;
                let name = row
                    .item_name
                    .clone()
                    .unwrap_or_else(|| format!("item #{}", row.item_id));
                self.popup = Some(Popup::Delete(super::DeletePrompt::for_row(row.id, name)));
                None
            }

            _ => None,
        }
    }

    /// Switch to `view`; the first activation of a view triggers its fetch.
    fn switch_view(&mut self, view: View) -> Option<Action> {
        if self.view == view {
            return None;
        }
        self.view = view;
        let needs_first_load = match view {
            View::Inventory => self.inventory.rows.is_none() && !self.inventory.loading,
            View::Logs => self.logs.rows.is_none() && !self.logs.loading,
        };
        needs_first_load.then(|| self.reload_active())
    }
}
