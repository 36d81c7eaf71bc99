//! 数据模型层

pub mod item;
pub mod samples;

pub use item::{CarouselItem, ItemId};
pub use samples::sample_items;
