//! carousel - 终端里的推荐卡片轮播
//!
//! 模块结构：
//! - core: 输入事件与 View 契约
//! - kernel: 偏移控制器、布局测量、动画、设置/数据加载
//! - models: 轮播条目
//! - ui: 绘制命令、命中测试树、后端
//! - views: 轮播组件
//! - app: 应用层（App）
//! - tui: 终端宿主（crossterm）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;
