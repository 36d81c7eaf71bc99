//! UI layer (thin wrapper over `ratatui`).
//!
//! Widgets paint into a backend-neutral command list and register hit-test
//! nodes; only `backend::terminal` knows about `ratatui` types.

pub mod backend;
pub mod core;
