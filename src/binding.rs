use crate::storage::Storage;
use serde::{Serialize, de::DeserializeOwned};

/// An in-memory value tied to one storage key. Every change is written back.
///
/// Two bindings to the same key do not see each other's writes until one of
/// them is recreated.
pub struct Binding<T> {
    storage: Storage,
    key: String,
    value: T,
}

impl<T> Binding<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(storage: &Storage, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = storage.get(&key).unwrap_or(default);
        Self {
            storage: storage.clone(),
            key,
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.storage.set(&self.key, &self.value);
    }

    pub fn update(&mut self, f: impl FnOnce(T) -> T)
    where
        T: Default,
    {
        let previous = std::mem::take(&mut self.value);
        self.set(f(previous));
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
