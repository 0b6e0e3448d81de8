//! GearTracker HTTP API client.
//!
//! This crate provides a typed async client for the GearTracker inventory
//! admin backend: paginated inventory and operation-log listings, item
//! mutations with audit reasons, catalog lookups, and the connection
//! status probe.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::GearClient;
pub use client::builder::GearClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AddItemRequest, CatalogItem, CheckItem, ConnectionStatus, InventoryItem, InventoryPage,
    ItemDetail, MutationResponse, NewCatalogItem, OperationLog, OperationLogPage, PageParams,
    UpdateItem, total_pages,
};
