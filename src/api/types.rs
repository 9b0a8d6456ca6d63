use serde::{Deserialize, Serialize};

/// A single inventory record, as the server stores it.
///
/// The `id` is assigned by the server and never by this client. Field names
/// on the wire follow the backend's JSON (`_id`, `itemName`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "itemName")]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: String,
    pub description: String,
}

/// An item as the user drafts it: everything but the server-assigned id.
///
/// Sent as the body of create (POST) and update (PUT) requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    #[serde(rename = "itemName")]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: String,
    pub description: String,
}

impl ItemDraft {
    /// The draft corresponding to an existing item, for pre-filling edits.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            category: item.category.clone(),
            description: item.description.clone(),
        }
    }
}

/// The backend's success envelope: `{"success": true, "data": ...}`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
}

/// The backend's error body: `{"success": false, "error": "..."}`.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    #[allow(dead_code)]
    #[serde(default)]
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Contract test: drafts must serialize to the exact body shape the
    /// backend expects on POST/PUT.
    #[test]
    fn test_draft_serialization() {
        let draft = ItemDraft {
            name: "Widget".to_string(),
            quantity: 4,
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget.".to_string(),
        };
        let serialized = serde_json::to_string(&draft).unwrap();
        let expected = r#"{"itemName":"Widget","quantity":4,"price":9.99,"category":"Tools","description":"A widget."}"#;
        assert_eq!(serialized, expected);
    }

    #[test]
    fn test_item_deserializes_wire_names() {
        let json = r#"{"_id":"abc123","itemName":"Widget","quantity":4,"price":9.99,"category":"Tools","description":"A widget."}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "abc123");
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 4);
    }

    #[test]
    fn test_envelope_unwraps_data() {
        let json = r#"{"success":true,"data":[{"_id":"a","itemName":"A","quantity":1,"price":1.0,"category":"c","description":"d"}]}"#;
        let envelope: Envelope<Vec<Item>> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, "a");
    }

    #[test]
    fn test_error_body_parses() {
        let json = r#"{"success":false,"error":"Item with this name already exists"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "Item with this name already exists");
    }

    #[test]
    fn test_draft_from_item_drops_id() {
        let item = Item {
            id: "abc".to_string(),
            name: "Widget".to_string(),
            quantity: 2,
            price: 3.5,
            category: "Tools".to_string(),
            description: "d".to_string(),
        };
        let draft = ItemDraft::from_item(&item);
        assert_eq!(draft.name, "Widget");
        let serialized = serde_json::to_string(&draft).unwrap();
        assert!(!serialized.contains("_id"));
    }
}
