use crate::kernel::config::CarouselConfig;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fields left out fall back to the terminal preset, not the pixel one.
    #[serde(default = "default_carousel", deserialize_with = "deserialize_carousel")]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub heading: HeadingSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_carousel() -> CarouselConfig {
    CarouselConfig::TERMINAL
}

fn deserialize_carousel<'de, D>(deserializer: D) -> Result<CarouselConfig, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let overrides = Value::deserialize(deserializer)?;
    let mut merged = serde_json::to_value(default_carousel()).map_err(D::Error::custom)?;
    merge_json(&mut merged, overrides);
    let config: CarouselConfig = serde_json::from_value(merged).map_err(D::Error::custom)?;
    Ok(config.sanitized())
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, value) => *base = value,
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel: default_carousel(),
            heading: HeadingSettings::default(),
            animation: AnimationSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSettings {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            title: "Everything.".to_string(),
            subtitle: "Yes, even that.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Fraction of the remaining distance covered per frame (0.05..=1.0).
    pub speed: f64,
    pub frame_interval_ms: u64,
}

impl AnimationSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            speed: 0.35,
            frame_interval_ms: 16,
        }
    }
}

/// Color overrides, as names (`"cyan"`, `"dark_gray"`) or `#rrggbb`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_hover_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_hover_bg: Option<String>,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
