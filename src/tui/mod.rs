//! Terminal host (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`views` so the carousel itself renders headless in tests.

pub mod crossterm;
pub mod terminal_guard;
