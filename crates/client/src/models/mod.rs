//! Typed models for the GearTracker HTTP API.

pub mod catalog;
pub mod common;
pub mod inventory;
pub mod logs;
pub mod status;

pub use catalog::{AddItemRequest, CatalogItem, CheckItem, NewCatalogItem};
pub use common::{MutationResponse, PageParams, total_pages};
pub use inventory::{InventoryItem, InventoryPage, ItemDetail, UpdateItem};
pub use logs::{OperationLog, OperationLogPage};
pub use status::ConnectionStatus;
