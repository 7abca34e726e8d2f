//! Item data read from a directory tree: `<root>/<classID>/<itemID>.json`.

use georeg::domain::ItemRef;
use georeg::kernel::context::{ItemDataState, RegisterItemData};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const ITEM_EXTENSION: &str = "json";

#[derive(Debug, Default)]
pub(crate) struct DirStore {
    items: HashMap<ItemRef, Value>,
}

impl DirStore {
    /// Reads every item file below `root`. Unreadable files are skipped with a warning and then
    /// resolve as missing.
    pub(crate) fn open(root: &Path) -> Self {
        let items: HashMap<ItemRef, Value> = WalkDir::new(root)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .flatten()
            .filter(is_item_file)
            .filter_map(|entry| read_item(&entry))
            .collect();

        debug!(root = %root.display(), items = items.len(), "Item directory loaded");
        Self { items }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

impl RegisterItemData for DirStore {
    fn item_data(&self, item_ref: &ItemRef) -> ItemDataState {
        self.items.get(item_ref).cloned().map_or(ItemDataState::Missing, ItemDataState::Ready)
    }
}

fn is_item_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.path().extension().and_then(|ext| ext.to_str()) == Some(ITEM_EXTENSION)
}

fn read_item(entry: &DirEntry) -> Option<(ItemRef, Value)> {
    let path = entry.path();
    let item_id = path.file_stem()?.to_str()?;
    let class_id = path.parent()?.file_name()?.to_str()?;

    let value = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<Value>(&raw).map_err(|e| e.to_string()));

    match value {
        Ok(value) => Some((ItemRef::new(class_id, item_id), value)),
        Err(e) => {
            warn!(p = %path.display(), err = %e, "Skipping unreadable item");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn items_are_keyed_by_directory_and_stem() -> Result<(), Box<dyn std::error::Error>> {
        let root = tempdir()?;
        fs::create_dir_all(root.path().join("datums--geodetic"))?;
        fs::write(root.path().join("datums--geodetic/D6326.json"), r#"{"name":"WGS 84"}"#)?;
        fs::write(root.path().join("datums--geodetic/broken.json"), "{")?;
        fs::write(root.path().join("datums--geodetic/notes.txt"), "ignored")?;
        fs::write(root.path().join("top.json"), "{}")?;

        let store = DirStore::open(root.path());

        assert_eq!(store.len(), 1);
        assert!(matches!(
            store.item_data(&ItemRef::new("datums--geodetic", "D6326")),
            ItemDataState::Ready(value) if value["name"] == "WGS 84"
        ));
        assert!(matches!(
            store.item_data(&ItemRef::new("datums--geodetic", "broken")),
            ItemDataState::Missing
        ));
        Ok(())
    }
}
