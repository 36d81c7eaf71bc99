use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item identifier as it appears in the source data: numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(CompactString),
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Text(CompactString::default())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// One testimonial card.
///
/// Items are never validated: a missing field deserializes to an empty value and
/// simply renders blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    #[serde(default)]
    pub id: ItemId,
    /// Image reference for the card background.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub category: CompactString,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CarouselItem {
    pub fn new(
        id: u64,
        url: impl Into<String>,
        category: &str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::Number(id),
            url: url.into(),
            category: CompactString::from(category),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/item.rs"]
mod tests;
