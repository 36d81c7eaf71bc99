//! 视图层模块
//!
//! - CarouselView: 轮播组件（纯渲染 + 命中测试节点）

pub mod carousel;

pub use carousel::{CarouselStyles, CarouselView};
