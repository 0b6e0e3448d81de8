//! Runtime support: terminal lifecycle and async side effects.

pub mod side_effects;
pub mod terminal;
