use crate::catalog::Catalog;
use crate::errors::SelectionError;
use crate::keys::CUSTOM_DAILY_ATHKAR;
use crate::models::{Athkar, ListCategory};
use crate::storage::Storage;
use std::collections::HashSet;
use tracing::error;

/// Items the user copied from the library into their daily lists.
pub struct CustomSelection {
    storage: Storage,
    items: Vec<Athkar>,
}

impl CustomSelection {
    pub fn load(storage: &Storage) -> Self {
        Self {
            storage: storage.clone(),
            items: storage.get(CUSTOM_DAILY_ATHKAR).unwrap_or_default(),
        }
    }

    pub fn items(&self) -> &[Athkar] {
        &self.items
    }

    /// Appends the items of a library list that are not selected yet.
    pub fn add_category(&mut self, catalog: &Catalog, key: &str) -> Result<usize, SelectionError> {
        let library = catalog
            .get_list_by_category(key)
            .ok_or_else(|| SelectionError::UnknownCategory(key.to_string()))?;

        let selected: HashSet<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        let fresh: Vec<Athkar> = library
            .items
            .iter()
            .filter(|item| !selected.contains(item.id.as_str()))
            .cloned()
            .collect();

        if fresh.is_empty() {
            return Err(SelectionError::AlreadyAdded(key.to_string()));
        }

        let added = fresh.len();
        let mut updated = self.items.clone();
        updated.extend(fresh);
        self.save(updated)?;
        Ok(added)
    }

    /// `Ok(false)` when `id` was not selected.
    pub fn remove_item(&mut self, id: &str) -> Result<bool, SelectionError> {
        if !self.items.iter().any(|item| item.id == id) {
            return Ok(false);
        }
        let updated: Vec<Athkar> = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.save(updated)?;
        Ok(true)
    }

    pub fn is_category_added(&self, catalog: &Catalog, key: &str) -> bool {
        let Some(library) = catalog.get_list_by_category(key) else {
            return false;
        };
        let selected: HashSet<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        library
            .items
            .iter()
            .all(|item| selected.contains(item.id.as_str()))
    }

    pub fn grouped(&self, catalog: &Catalog) -> Vec<ListCategory> {
        catalog.group_selection(&self.items)
    }

    fn save(&mut self, items: Vec<Athkar>) -> Result<(), SelectionError> {
        if let Err(err) = self.storage.try_set(CUSTOM_DAILY_ATHKAR, &items) {
            error!("failed to save the daily list: {err}");
            return Err(err.into());
        }
        self.items = items;
        Ok(())
    }
}
