use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque unique identifier, generated client-side.
pub type EntityId = String;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub category_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub date: String,
}

/// The entire persisted and transmitted unit. Every save overwrites the
/// whole document; every load replaces it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub categories: Vec<Category>,
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
}

impl Document {
    /// Builds a document from a replace-request body. Returns `None` when
    /// any of the three collections is absent or fails to parse as its
    /// entity list; unexpected top-level fields are dropped.
    pub fn from_body(body: &Value) -> Option<Document> {
        let categories = body.get("categories")?;
        let tasks = body.get("tasks")?;
        let events = body.get("events")?;

        Some(Document {
            categories: serde_json::from_value(categories.clone()).ok()?,
            tasks: serde_json::from_value(tasks.clone()).ok()?,
            events: serde_json::from_value(events.clone()).ok()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SaveResponse {
    pub success: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_body_accepts_full_document() {
        let body = json!({
            "categories": [{"id": "c1", "name": "Work", "color": "#ff0000"}],
            "tasks": [{"id": "t1", "title": "Write", "categoryId": "c1", "date": "2024-05-01", "completed": false}],
            "events": [{"id": "e1", "title": "Launch", "date": "2024-05-01"}],
        });

        let document = Document::from_body(&body).unwrap();
        assert_eq!(document.categories.len(), 1);
        assert_eq!(document.tasks[0].category_id, "c1");
        assert_eq!(document.events[0].title, "Launch");
    }

    #[test]
    fn from_body_rejects_missing_collection() {
        let body = json!({"categories": [], "tasks": []});
        assert!(Document::from_body(&body).is_none());
    }

    #[test]
    fn from_body_rejects_malformed_collection() {
        let body = json!({"categories": 5, "tasks": [], "events": []});
        assert!(Document::from_body(&body).is_none());
    }

    #[test]
    fn from_body_drops_unknown_fields() {
        let body = json!({"categories": [], "tasks": [], "events": [], "version": 7});
        let document = Document::from_body(&body).unwrap();
        assert_eq!(document, Document::default());
        let reserialized = serde_json::to_value(&document).unwrap();
        assert!(reserialized.get("version").is_none());
    }

    #[test]
    fn task_completed_defaults_to_false() {
        let task: Task =
            serde_json::from_value(json!({"id": "t1", "title": "Write", "categoryId": "c1"}))
                .unwrap();
        assert!(!task.completed);
        assert!(task.date.is_none());
    }

    #[test]
    fn undated_task_serializes_without_date_key() {
        let task = Task {
            id: "t1".into(),
            title: "Write".into(),
            category_id: "c1".into(),
            date: None,
            completed: false,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("date").is_none());
        assert_eq!(value.get("categoryId").unwrap(), "c1");
    }
}
