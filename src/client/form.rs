use std::sync::Arc;

use crate::core::error::Result;
use crate::core::traits::Entity;

use super::service::EntityService;

/// In-memory draft of one entity plus the save-in-progress flag.
///
/// The form dispatches purely on identifier presence: a draft that already
/// has an id goes through the service's update call, a fresh draft through
/// its create call, mirroring the split the server enforces. The `saving`
/// flag is informational only; it does not guard against a second save
/// started before the first completes.
pub struct UpdateForm<T> {
    draft: T,
    saving: bool,
    open: bool,
    service: Arc<dyn EntityService<T>>,
}

impl<T: Entity> UpdateForm<T> {
    pub fn new(draft: T, service: Arc<dyn EntityService<T>>) -> Self {
        Self {
            draft,
            saving: false,
            open: true,
            service,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Persist the draft through the client service.
    ///
    /// On success the saved entity replaces the draft and the form closes;
    /// on error the form stays open with the draft untouched. Either way
    /// `saving` is cleared once the call completes.
    pub async fn save(&mut self) -> Result<T> {
        self.saving = true;

        let result = match self.draft.id() {
            Some(_) => self.service.update(&self.draft).await,
            None => self.service.create(&self.draft).await,
        };

        self.saving = false;

        let saved = result?;
        self.draft = saved.clone();
        self.open = false;
        Ok(saved)
    }
}
