//! Services layer (ports + adapters).
//!
//! - `ports`: plain data contracts shared with the app.
//! - `adapters`: filesystem-backed implementations.

pub mod adapters;
pub mod ports;
