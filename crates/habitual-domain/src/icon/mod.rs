use serde::{Deserialize, Serialize};

/// Display data for a habit icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub id: String,
    pub emoji: String,
    pub label: String,
}

impl IconDescriptor {
    pub fn new(id: impl Into<String>, emoji: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            emoji: emoji.into(),
            label: label.into(),
        }
    }
}

/// Lookup of icon descriptors by id
pub trait IconRegistry: Send + Sync {
    /// Resolve an icon, falling back to the registry default for unknown ids
    fn lookup_by_id(&self, id: &str) -> IconDescriptor;

    fn random_icon(&self) -> IconDescriptor;

    fn all(&self) -> Vec<IconDescriptor>;

    fn resolve(&self, id: Option<&str>) -> IconDescriptor {
        match id {
            Some(id) => self.lookup_by_id(id),
            None => self.lookup_by_id(""),
        }
    }
}
