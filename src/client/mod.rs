pub mod api;
pub mod state;

use std::error::Error;
use std::fmt;

use crate::data::{Document, EntityId};
use api::{ApiClient, SyncError};
use state::{CategoryDraft, EventDraft, StateError, TaskDraft};

/// Owns the in-memory document and keeps it synchronized with the server:
/// every mutation is followed by a push of the full document, and the
/// registered render hook fires after every load and every successful push.
///
/// A failed push leaves the already-mutated local state in place; the
/// in-memory and persisted copies then diverge until the next successful
/// push or load.
pub struct Planner {
    api: ApiClient,
    document: Document,
    render_hook: Option<Box<dyn FnMut(&Document)>>,
}

#[derive(Debug)]
pub enum PlannerError {
    State(StateError),
    Sync(SyncError),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::State(e) => write!(f, "{}", e),
            PlannerError::Sync(e) => write!(f, "{}", e),
        }
    }
}

impl Error for PlannerError {}

impl From<StateError> for PlannerError {
    fn from(e: StateError) -> PlannerError {
        PlannerError::State(e)
    }
}

impl From<SyncError> for PlannerError {
    fn from(e: SyncError) -> PlannerError {
        PlannerError::Sync(e)
    }
}

impl Planner {
    pub fn new(api: ApiClient) -> Planner {
        Planner {
            api,
            document: Document::default(),
            render_hook: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Registers the single "re-render everything from current state" entry
    /// point the UI layer hangs its drawing off.
    pub fn on_render(&mut self, hook: impl FnMut(&Document) + 'static) {
        self.render_hook = Some(Box::new(hook));
    }

    /// Replaces the in-memory document with the server's and notifies the
    /// render hook. On failure the prior state is left untouched.
    pub fn load(&mut self) -> Result<(), PlannerError> {
        match self.api.fetch_document() {
            Ok(document) => {
                self.document = document;
                self.notify();
                Ok(())
            }
            Err(e) => {
                log::warn!("loading the document failed: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn upsert_category(&mut self, draft: CategoryDraft) -> Result<EntityId, PlannerError> {
        let id = self.document.upsert_category(draft);
        self.commit()?;
        Ok(id)
    }

    pub fn upsert_task(&mut self, draft: TaskDraft) -> Result<EntityId, PlannerError> {
        let id = self.document.upsert_task(draft);
        self.commit()?;
        Ok(id)
    }

    pub fn upsert_event(&mut self, draft: EventDraft) -> Result<EntityId, PlannerError> {
        let id = self.document.upsert_event(draft);
        self.commit()?;
        Ok(id)
    }

    /// Fails without issuing a push while tasks still reference the
    /// category.
    pub fn remove_category(&mut self, id: &str) -> Result<(), PlannerError> {
        self.document.remove_category(id)?;
        self.commit()
    }

    pub fn remove_task(&mut self, id: &str) -> Result<(), PlannerError> {
        self.document.remove_task(id);
        self.commit()
    }

    pub fn remove_event(&mut self, id: &str) -> Result<(), PlannerError> {
        self.document.remove_event(id);
        self.commit()
    }

    pub fn toggle_task_completion(&mut self, id: &str) -> Result<bool, PlannerError> {
        let found = self.document.toggle_task_completion(id);
        self.commit()?;
        Ok(found)
    }

    fn commit(&mut self) -> Result<(), PlannerError> {
        if let Err(e) = self.api.push_document(&self.document) {
            log::warn!("saving the document failed: {}", e);
            return Err(e.into());
        }

        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(hook) = self.render_hook.as_mut() {
            hook(&self.document);
        }
    }
}
