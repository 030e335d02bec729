//! Item Entity
//!
//! A named record whose identifier is assigned by the server.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Server-assigned item identifier
///
/// Opaque to the client: any JSON number (negative and fractional included)
/// or string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n.into())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// An item as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (never generated locally)
    pub id: ItemId,
    /// Display name
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    pub name: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of a successful create response
///
/// Some deployments answer with the bare item, others wrap it as
/// `{ "message": ..., "item": {...} }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatedItem {
    Bare(Item),
    Wrapped { item: Item },
}

impl CreatedItem {
    pub fn into_item(self) -> Item {
        match self {
            CreatedItem::Bare(item) | CreatedItem::Wrapped { item } => item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_accepts_number_and_string() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id": 7, "name": "a"}, {"id": "x-1", "name": "b"}]"#).unwrap();
        assert_eq!(items[0].id, ItemId::from(7u64));
        assert_eq!(items[1].id, ItemId::Text("x-1".to_string()));
        assert_eq!(items[0].id.to_string(), "7");
        assert_eq!(items[1].id.to_string(), "x-1");
    }

    #[test]
    fn test_item_id_accepts_negative_and_float() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id": -1, "name": "a"}, {"id": 2.0, "name": "b"}, {"id": 3, "name": "c"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id.to_string(), "-1");
        assert_eq!(items[1].id.to_string(), "2.0");
        assert_eq!(items[2].id, ItemId::from(3u64));
        assert_ne!(items[1].id, items[2].id);

        let body = serde_json::to_string(&items[0]).unwrap();
        assert_eq!(body, r#"{"id":-1,"name":"a"}"#);
    }

    #[test]
    fn test_created_item_envelopes() {
        let bare: CreatedItem = serde_json::from_str(r#"{"id": 3, "name": "Widget"}"#).unwrap();
        assert_eq!(bare.into_item(), Item::new(3u64, "Widget"));

        let wrapped: CreatedItem = serde_json::from_str(
            r#"{"message": "Item added successfully", "item": {"id": 4, "name": "Gadget"}}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_item(), Item::new(4u64, "Gadget"));
    }

    #[test]
    fn test_new_item_body() {
        let body = serde_json::to_string(&NewItem::new("Widget")).unwrap();
        assert_eq!(body, r#"{"name":"Widget"}"#);
    }
}
