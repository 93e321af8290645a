use crate::data::builtin_lists;
use crate::models::{Athkar, ListCategory};
use std::collections::HashSet;

pub const CUSTOM_KEY_PREFIX: &str = "custom-";
pub const CUSTOM_STORAGE_KEY_PREFIX: &str = "custom_list_completed_";

/// Registry of every list the app knows about. Built once at startup and
/// shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    lists: Vec<ListCategory>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::new(builtin_lists())
    }

    pub fn new(lists: Vec<ListCategory>) -> Self {
        Self { lists }
    }

    pub fn get_list_by_category(&self, key: &str) -> Option<&ListCategory> {
        self.lists.iter().find(|list| list.key == key)
    }

    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(|list| list.key.as_str())
    }

    pub fn lists(&self) -> &[ListCategory] {
        &self.lists
    }

    /// Every completion key the registry can hand out, custom lists included.
    pub fn storage_keys(&self) -> Vec<String> {
        let builtin = self.lists.iter().map(|list| list.storage_key.clone());
        let custom = self.lists.iter().map(|list| custom_storage_key(&list.key));
        builtin.chain(custom).collect()
    }

    /// Looks up a built-in key, or a `custom-<key>` group of the selection.
    pub fn resolve(&self, key: &str, selection: &[Athkar]) -> Option<ListCategory> {
        if let Some(library_key) = key.strip_prefix(CUSTOM_KEY_PREFIX) {
            return custom_group(self.get_list_by_category(library_key)?, selection);
        }
        self.get_list_by_category(key).cloned()
    }

    /// Groups a flat selection by library list, in catalog order.
    pub fn group_selection(&self, selection: &[Athkar]) -> Vec<ListCategory> {
        self.lists
            .iter()
            .filter_map(|list| custom_group(list, selection))
            .collect()
    }
}

pub fn custom_key(library_key: &str) -> String {
    format!("{CUSTOM_KEY_PREFIX}{library_key}")
}

pub fn custom_storage_key(library_key: &str) -> String {
    format!("{CUSTOM_STORAGE_KEY_PREFIX}{library_key}")
}

fn custom_group(library: &ListCategory, selection: &[Athkar]) -> Option<ListCategory> {
    let selected: HashSet<&str> = selection.iter().map(|item| item.id.as_str()).collect();
    let items: Vec<Athkar> = library
        .items
        .iter()
        .filter(|item| selected.contains(item.id.as_str()))
        .cloned()
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(ListCategory {
        key: custom_key(&library.key),
        title: library.title.clone(),
        items,
        storage_key: custom_storage_key(&library.key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_not_found() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_list_by_category("unknown_key").is_none());
        assert!(catalog.resolve("unknown_key", &[]).is_none());
        assert!(catalog.resolve("custom-unknown_key", &[]).is_none());
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = Catalog::builtin();
        let morning = catalog.get_list_by_category("morning").expect("morning list");
        assert_eq!(morning.storage_key, "morning_completed_v1");
        assert!(catalog.get_list_by_category("Morning").is_none());
        assert!(catalog.get_list_by_category("morning ").is_none());
    }

    #[test]
    fn enumerates_keys_in_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog.category_keys().collect();
        assert_eq!(keys, vec!["morning", "evening", "after_prayer", "sleep"]);
    }

    #[test]
    fn storage_keys_cover_custom_lists() {
        let catalog = Catalog::builtin();
        let keys = catalog.storage_keys();
        assert!(keys.contains(&"evening_completed_v1".to_string()));
        assert!(keys.contains(&"custom_list_completed_sleep".to_string()));
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn custom_group_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let sleep = catalog.get_list_by_category("sleep").unwrap();
        let selection = vec![sleep.items[2].clone(), sleep.items[0].clone()];

        let group = catalog.resolve("custom-sleep", &selection).expect("group");
        assert_eq!(group.item_ids(), vec!["s1", "s3"]);
        assert_eq!(group.storage_key, "custom_list_completed_sleep");
        assert!(catalog.resolve("custom-morning", &selection).is_none());
    }
}
