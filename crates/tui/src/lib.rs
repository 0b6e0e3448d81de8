//! gear-tui: terminal UI for the GearTracker inventory service.
//!
//! The crate is split along the same lines as the event loop:
//! - [`action`]: messages flowing through the action channel.
//! - [`app`]: state and pure action handling.
//! - [`ui`]: rendering.
//! - [`runtime`]: terminal lifecycle and async side effects.

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;
