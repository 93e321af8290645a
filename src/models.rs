use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athkar {
    pub id: String,
    pub category: String,
    pub text: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCategory {
    pub key: String,
    pub title: String,
    pub items: Vec<Athkar>,
    pub storage_key: String,
}

impl ListCategory {
    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AddCustomRequest {
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemindersPayload {
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListSummary {
    pub key: String,
    pub title: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
    pub complete: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub athkar: Athkar,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListDetail {
    #[serde(flatten)]
    pub summary: ListSummary,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomGroupView {
    pub key: String,
    pub title: String,
    pub items: Vec<Athkar>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomAddResponse {
    pub added: usize,
    pub groups: Vec<CustomGroupView>,
}
