use serde::{Deserialize, Serialize};

/// An entry in the sidebar rail. `icon` names an icon the UI layer knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: String::new(),
            disabled: false,
            tooltip: None,
        }
    }
}

/// Registered sidebar items and which panel is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarRegistry {
    items: Vec<SidebarItem>,
    active_item_id: Option<String>,
}

impl SidebarRegistry {
    pub fn new(items: Vec<SidebarItem>, active_item_id: Option<String>) -> Self {
        let mut registry = Self::default();
        for item in items {
            registry.add_item(item);
        }
        registry.set_active_item(active_item_id);
        registry
    }

    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    pub fn active_item_id(&self) -> Option<&str> {
        self.active_item_id.as_deref()
    }

    pub fn active_item(&self) -> Option<&SidebarItem> {
        let id = self.active_item_id.as_deref()?;
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_item_id.as_deref() == Some(id)
    }

    /// Insert, or replace in place when the id is already registered.
    pub fn add_item(&mut self, item: SidebarItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        if self.is_active(id) {
            self.active_item_id = None;
        }
    }

    pub fn set_active_item(&mut self, id: Option<String>) {
        self.active_item_id = id;
    }

    /// Open `id`, or close it when it is already open. Disabled and
    /// unknown items are ignored.
    pub fn toggle(&mut self, id: &str) {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            tracing::debug!(id, "toggle ignored for unknown sidebar item");
            return;
        };
        if item.disabled {
            return;
        }
        if self.is_active(id) {
            self.active_item_id = None;
        } else {
            self.active_item_id = Some(id.to_string());
        }
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        self.active_item_id = None;
    }
}
