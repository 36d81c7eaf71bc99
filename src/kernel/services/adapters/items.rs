use crate::models::CarouselItem;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Load the card list from a JSON array.
///
/// Entries are taken as-is; duplicated ids are only reported.
pub fn load_items(path: &Path) -> std::io::Result<Vec<CarouselItem>> {
    let data = std::fs::read_to_string(path)?;
    let items: Vec<CarouselItem> = serde_json::from_str(&data)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let mut seen = FxHashSet::default();
    for item in &items {
        if !seen.insert(&item.id) {
            tracing::warn!(id = %item.id, "duplicate carousel item id");
        }
    }

    tracing::info!(path = %path.display(), count = items.len(), "loaded carousel items");
    Ok(items)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/items.rs"]
mod tests;
