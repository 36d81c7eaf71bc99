//! Headless carousel core: geometry config, offset controller, layout
//! measurement and animation state. Nothing here touches the terminal.

pub mod animation;
pub mod carousel;
pub mod config;
pub mod measure;
pub mod services;

pub use animation::AnimatedValue;
pub use carousel::{Carousel, CarouselAction, CarouselState};
pub use config::{Breakpoints, CarouselConfig};
pub use measure::{LayoutMeasurer, Subscription};
