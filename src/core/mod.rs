//! 核心抽象：输入事件与视图接口
//!
//! Terminal crates are converted into these types at the edge (`tui`), so the
//! carousel logic and its tests never depend on crossterm.

pub mod event;
pub mod view;

pub use event::InputEvent;
pub use view::{EventResult, View};
