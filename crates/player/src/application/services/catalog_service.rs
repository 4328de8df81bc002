//! Catalog Service - the parent-managed activity catalog
//!
//! Owns the in-memory custom list and hidden-id set for one session. They are
//! read from the stores when the service is loaded and changed only through
//! the mutation methods here. Every mutation applies the change in memory
//! first and then writes the full collection back through its store port.
//!
//! Base activities are fixed for the lifetime of the service: they can be
//! hidden, never edited or deleted.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use kidsapp_domain::{
    compose_catalog, with_hidden_flags, Activity, ActivityDraft, ActivityId, ActivitySource,
    CatalogEntry, DomainError, DraftError,
};

use crate::ports::outbound::{CustomActivityStorePort, HiddenActivityStorePort};

/// Errors from catalog mutations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Activity not found: {0}")]
    NotFound(ActivityId),

    #[error("An activity with id {0} already exists")]
    DuplicateId(ActivityId),

    /// Base activities can only be hidden or shown
    #[error("Activity {0} is built in and cannot be changed")]
    ReadOnly(ActivityId),

    #[error(transparent)]
    InvalidDraft(#[from] DraftError),

    #[error(transparent)]
    Validation(#[from] DomainError),
}

pub struct CatalogService {
    base: Vec<Activity>,
    custom: Vec<Activity>,
    hidden: HashSet<ActivityId>,
    custom_store: Arc<dyn CustomActivityStorePort>,
    hidden_store: Arc<dyn HiddenActivityStorePort>,
    revision: u64,
}

impl CatalogService {
    /// Start a session: read custom activities and hidden ids from the stores.
    pub fn load(
        base: Vec<Activity>,
        custom_store: Arc<dyn CustomActivityStorePort>,
        hidden_store: Arc<dyn HiddenActivityStorePort>,
    ) -> Self {
        let custom = custom_store.read_custom();
        let hidden = hidden_store.read_hidden_ids();
        debug!(
            base = base.len(),
            custom = custom.len(),
            hidden = hidden.len(),
            "Loaded activity catalog"
        );

        Self {
            base,
            custom,
            hidden,
            custom_store,
            hidden_store,
            revision: 0,
        }
    }

    /// Re-read both stores through their ports.
    ///
    /// Sees whatever the underlying `StorageProvider` currently returns. The
    /// desktop provider serves a cache loaded when it was opened, so writes by
    /// another process only show up after the platform is recreated.
    pub fn reload(&mut self) {
        self.custom = self.custom_store.read_custom();
        self.hidden = self.hidden_store.read_hidden_ids();
        self.revision += 1;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The available catalog: custom first, then base, without hidden ones.
    pub fn compose_catalog(&self) -> Vec<Activity> {
        compose_catalog(&self.base, &self.custom, &self.hidden)
    }

    /// Every activity with its hidden flag, for the parent screen.
    pub fn parent_view(&self) -> Vec<CatalogEntry<'_>> {
        with_hidden_flags(&self.base, &self.custom, &self.hidden)
    }

    pub fn get(&self, id: &ActivityId) -> Option<&Activity> {
        self.custom
            .iter()
            .chain(self.base.iter())
            .find(|activity| &activity.id == id)
    }

    pub fn is_hidden(&self, id: &ActivityId) -> bool {
        self.hidden.contains(id)
    }

    pub fn base(&self) -> &[Activity] {
        &self.base
    }

    pub fn custom(&self) -> &[Activity] {
        &self.custom
    }

    pub fn hidden_ids(&self) -> &HashSet<ActivityId> {
        &self.hidden
    }

    /// Bumped on every change to the custom list or the hidden set.
    ///
    /// Compositions computed at the same revision are identical.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Add a custom activity at the end of the custom list.
    #[instrument(skip(self, activity), fields(activity_id = %activity.id))]
    pub fn create_custom(&mut self, mut activity: Activity) -> Result<(), CatalogError> {
        if self.get(&activity.id).is_some() {
            return Err(CatalogError::DuplicateId(activity.id));
        }
        if activity.age_groups.is_empty() {
            return Err(DomainError::validation("Activity needs at least one age group").into());
        }
        activity.source = ActivitySource::Custom;

        info!(title = %activity.title, "Created custom activity");
        self.custom.push(activity);
        self.persist_custom();
        Ok(())
    }

    /// Validate a form draft and add it under `id`.
    pub fn create_from_draft(
        &mut self,
        id: ActivityId,
        draft: &ActivityDraft,
    ) -> Result<Activity, CatalogError> {
        let activity = draft.validate()?.into_activity(id);
        self.create_custom(activity.clone())?;
        Ok(activity)
    }

    /// Replace a custom activity's fields, keeping its id and source.
    #[instrument(skip(self, replacement), fields(activity_id = %id))]
    pub fn edit_custom(
        &mut self,
        id: &ActivityId,
        mut replacement: Activity,
    ) -> Result<(), CatalogError> {
        let index = self.custom_index(id)?;
        if replacement.age_groups.is_empty() {
            return Err(DomainError::validation("Activity needs at least one age group").into());
        }

        let existing = &mut self.custom[index];
        replacement.id = existing.id.clone();
        replacement.source = existing.source;
        *existing = replacement;

        info!("Edited custom activity");
        self.persist_custom();
        Ok(())
    }

    /// Validate a form draft and apply it to an existing custom activity.
    pub fn edit_from_draft(
        &mut self,
        id: &ActivityId,
        draft: &ActivityDraft,
    ) -> Result<Activity, CatalogError> {
        let index = self.custom_index(id)?;
        let edited = draft.validate()?.apply_to(&self.custom[index]);
        self.edit_custom(id, edited.clone())?;
        Ok(edited)
    }

    /// Remove a custom activity, and its hidden-id entry if there is one.
    #[instrument(skip(self), fields(activity_id = %id))]
    pub fn delete_custom(&mut self, id: &ActivityId) -> Result<(), CatalogError> {
        let index = self.custom_index(id)?;

        self.custom.remove(index);
        self.persist_custom();

        if self.hidden.remove(id) {
            self.persist_hidden();
        }

        info!("Deleted custom activity");
        Ok(())
    }

    /// Hide or show an activity. Repeating the same call changes nothing.
    #[instrument(skip(self), fields(activity_id = %id))]
    pub fn set_hidden(&mut self, id: &ActivityId, hidden: bool) -> Result<(), CatalogError> {
        if self.get(id).is_none() {
            return Err(CatalogError::NotFound(id.clone()));
        }

        let changed = if hidden {
            self.hidden.insert(id.clone())
        } else {
            self.hidden.remove(id)
        };
        if !changed {
            debug!(hidden, "Visibility already set");
            return Ok(());
        }

        info!(hidden, "Changed activity visibility");
        self.persist_hidden();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Position of a custom activity, or why `id` cannot be changed.
    fn custom_index(&self, id: &ActivityId) -> Result<usize, CatalogError> {
        if let Some(index) = self.custom.iter().position(|a| &a.id == id) {
            return Ok(index);
        }
        if self.base.iter().any(|a| &a.id == id) {
            return Err(CatalogError::ReadOnly(id.clone()));
        }
        Err(CatalogError::NotFound(id.clone()))
    }

    fn persist_custom(&mut self) {
        self.revision += 1;
        self.custom_store.write_custom(&self.custom);
    }

    fn persist_hidden(&mut self) {
        self.revision += 1;
        self.hidden_store.write_hidden_ids(&self.hidden);
    }
}
