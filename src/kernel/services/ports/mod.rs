//! Service ports: data contracts.

pub mod settings;

pub use settings::{AnimationSettings, HeadingSettings, Settings, ThemeSettings};
