use std::error::Error;
use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::data::{Category, Document, EntityId, Event, Task};

/// Form-layer fields for creating or editing a category. `id` is `None` for
/// a creation and the existing id for an edit.
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub id: Option<EntityId>,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub id: Option<EntityId>,
    pub title: String,
    pub category_id: EntityId,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub id: Option<EntityId>,
    pub title: String,
    pub date: String,
}

/// Tasks and events falling on one calendar day.
#[derive(Debug)]
pub struct DayEntries<'a> {
    pub tasks: Vec<&'a Task>,
    pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StateError {
    CategoryInUse { id: EntityId, tasks: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::CategoryInUse { tasks, .. } => write!(
                f,
                "cannot remove category: {} task(s) still reference it",
                tasks
            ),
        }
    }
}

impl Error for StateError {}

fn generate_id() -> EntityId {
    Uuid::new_v4().to_string()
}

impl Document {
    /// Creates a category from the draft, or replaces the fields of the one
    /// the draft's id names. An unknown id is a no-op; either way the
    /// entity's id is returned.
    pub fn upsert_category(&mut self, draft: CategoryDraft) -> EntityId {
        match draft.id {
            Some(id) => {
                if let Some(category) = self.categories.iter_mut().find(|c| c.id == id) {
                    category.name = draft.name;
                    category.color = draft.color;
                }
                id
            }
            None => {
                let id = generate_id();
                self.categories.push(Category {
                    id: id.clone(),
                    name: draft.name,
                    color: draft.color,
                });
                id
            }
        }
    }

    /// Same create-or-replace semantics as categories. An edit never touches
    /// the completion flag; a creation starts out not completed.
    pub fn upsert_task(&mut self, draft: TaskDraft) -> EntityId {
        match draft.id {
            Some(id) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.title = draft.title;
                    task.category_id = draft.category_id;
                    task.date = draft.date;
                }
                id
            }
            None => {
                let id = generate_id();
                self.tasks.push(Task {
                    id: id.clone(),
                    title: draft.title,
                    category_id: draft.category_id,
                    date: draft.date,
                    completed: false,
                });
                id
            }
        }
    }

    pub fn upsert_event(&mut self, draft: EventDraft) -> EntityId {
        match draft.id {
            Some(id) => {
                if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
                    event.title = draft.title;
                    event.date = draft.date;
                }
                id
            }
            None => {
                let id = generate_id();
                self.events.push(Event {
                    id: id.clone(),
                    title: draft.title,
                    date: draft.date,
                });
                id
            }
        }
    }

    /// Removes a category, unless tasks still reference it, in which case
    /// nothing changes and the count of referencing tasks is reported.
    pub fn remove_category(&mut self, id: &str) -> Result<(), StateError> {
        let referencing = self.tasks.iter().filter(|t| t.category_id == id).count();
        if referencing > 0 {
            return Err(StateError::CategoryInUse {
                id: id.to_string(),
                tasks: referencing,
            });
        }

        self.categories.retain(|c| c.id != id);
        Ok(())
    }

    pub fn remove_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn remove_event(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Flips a task's completion flag. Returns whether a task with that id
    /// exists.
    pub fn toggle_task_completion(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Calendar bucketing: tasks and events whose date string equals the
    /// day's `YYYY-MM-DD` key. Undated tasks never appear.
    pub fn entries_on(&self, date: NaiveDate) -> DayEntries<'_> {
        let key = date.format("%Y-%m-%d").to_string();

        DayEntries {
            tasks: self
                .tasks
                .iter()
                .filter(|t| t.date.as_deref() == Some(key.as_str()))
                .collect(),
            events: self.events.iter().filter(|e| e.date == key).collect(),
        }
    }
}
