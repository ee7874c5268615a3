use serde::{Deserialize, Serialize};

/// A single scheduled to-do entry.
///
/// `priority` is a zero-based display rank. Within the set of items sharing
/// the same `date` and `done` flag the ranks are always exactly
/// `{0, 1, ..., n-1}`; the store keeps that invariant across every mutation.
///
/// Field names match the persisted JSON document, so this type serializes
/// directly into the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    /// Calendar day the item is scheduled on, as a `YYYY-MM-DD` key.
    pub date: String,
    pub done: bool,
    /// Older documents may omit this field; it was optional in early versions.
    #[serde(default)]
    pub priority: usize,
    pub text: String,
}

impl TodoItem {
    pub fn new(id: u64, date: impl Into<String>, priority: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            date: date.into(),
            done: false,
            priority,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_starts_pending() {
        let item = TodoItem::new(1, "2026-08-30", 0, "write tests");
        assert!(!item.done);
        assert_eq!(item.priority, 0);
        assert_eq!(item.date, "2026-08-30");
    }

    #[test]
    fn test_serialize_uses_wire_field_names() {
        let item = TodoItem::new(3, "2026-08-30", 2, "pack");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"date\":\"2026-08-30\""));
        assert!(json.contains("\"done\":false"));
        assert!(json.contains("\"priority\":2"));
        assert!(json.contains("\"text\":\"pack\""));
    }

    #[test]
    fn test_deserialize_missing_priority_defaults_to_zero() {
        let json = r#"{"id":1,"date":"2026-08-30","done":true,"text":"old entry"}"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.priority, 0);
        assert!(item.done);
    }

    #[test]
    fn test_roundtrip() {
        let item = TodoItem {
            id: 9,
            date: "2025-01-01".to_string(),
            done: true,
            priority: 4,
            text: "".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
