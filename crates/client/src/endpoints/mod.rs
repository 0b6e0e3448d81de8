//! Low-level HTTP functions, one module per API area.
//!
//! These free functions carry the actual request construction and
//! response mapping; [`crate::client::GearClient`] methods are thin
//! wrappers over them. Integration tests exercise them directly against
//! a wiremock server.

mod catalog;
mod inventory;
mod logs;
mod request;
mod status;

pub use catalog::{add_item, check_item, search_catalog};
pub use inventory::{delete_item, get_item, list_inventory, update_item};
pub use logs::list_operation_logs;
pub use request::send_request;
pub use status::connection_status;
