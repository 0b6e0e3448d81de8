//! Edit and delete popup state with local validation.
//!
//! Responsibilities:
//! - Hold the form fields for the edit and delete popups.
//! - Validate input locally before a mutation request is built; invalid
//!   forms never reach the network.
//!
//! Non-responsibilities:
//! - Key routing (see `app::input`).
//! - Rendering (see `ui::popup`).

use gear_client::{ItemDetail, UpdateItem};
use tui_input::Input;

#[derive(Debug)]
pub enum Popup {
    Edit(EditForm),
    Delete(DeletePrompt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Quantity,
    Location,
    Reason,
}

/// Form state for the edit popup, prefilled from the item detail endpoint.
#[derive(Debug)]
pub struct EditForm {
    pub inventory_id: i64,
    pub item_name: String,
    pub quantity: Input,
    pub location: Input,
    pub reason: Input,
    pub focus: EditField,
    pub error: Option<String>,
    /// Set while the update request is in flight; input is ignored.
    pub submitting: bool,
}

impl EditForm {
    pub fn for_item(detail: &ItemDetail) -> Self {
        Self {
            inventory_id: detail.inventory_id,
            item_name: detail
                .item_name
                .clone()
                .unwrap_or_else(|| format!("item #{}", detail.item_id)),
            quantity: Input::new(detail.quantity.to_string()),
            location: Input::new(detail.location.clone()),
            reason: Input::new(String::new()),
            focus: EditField::Quantity,
            error: None,
            submitting: false,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut Input {
        match self.focus {
            EditField::Quantity => &mut self.quantity,
            EditField::Location => &mut self.location,
            EditField::Reason => &mut self.reason,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            EditField::Quantity => EditField::Location,
            EditField::Location => EditField::Reason,
            EditField::Reason => EditField::Quantity,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            EditField::Quantity => EditField::Reason,
            EditField::Location => EditField::Quantity,
            EditField::Reason => EditField::Location,
        };
    }

    /// Validate the form and build the update payload.
    ///
    /// Quantity must parse as a positive integer, and location and reason
    /// must be non-empty after trimming.
    pub fn validate(&self) -> Result<UpdateItem, String> {
        let quantity: i64 = self
            .quantity
            .value()
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number".to_string())?;
        if quantity <= 0 {
            return Err("Quantity must be greater than zero".to_string());
        }

        let location = self.location.value().trim();
        if location.is_empty() {
            return Err("Location must not be empty".to_string());
        }

        let reason = self.reason.value().trim();
        if reason.is_empty() {
            return Err("A reason for the change is required".to_string());
        }

        Ok(UpdateItem {
            quantity,
            location: location.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// Form state for the delete confirmation popup.
#[derive(Debug)]
pub struct DeletePrompt {
    pub inventory_id: i64,
    pub item_name: String,
    pub reason: Input,
    pub error: Option<String>,
    pub submitting: bool,
}

impl DeletePrompt {
    pub fn for_row(inventory_id: i64, item_name: String) -> Self {
        Self {
            inventory_id,
            item_name,
            reason: Input::new(String::new()),
            error: None,
            submitting: false,
        }
    }

    /// Validate and return the trimmed deletion reason.
    pub fn validate(&self) -> Result<String, String> {
        let reason = self.reason.value().trim();
        if reason.is_empty() {
            return Err("A reason for the deletion is required".to_string());
        }
        Ok(reason.to_string())
    }
}
