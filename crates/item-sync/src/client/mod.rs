//! Item Sync Client
//!
//! Holds the local copy of the server's item list and keeps it in step with
//! the backend. Every local mutation happens only after the server confirmed
//! it, so a failure never needs a rollback.
//!
//! State lives in `RefCell`s and no borrow is held across an `.await`:
//! overlapping handlers may interleave (last response wins) but never panic.

use std::cell::RefCell;

use crate::backend::ItemsBackend;
use crate::domain::{Item, ItemId, NewItem};
use crate::error::{ApiError, SyncError, SyncResult};
use crate::status::{Operation, Status};
use crate::view::ItemView;


/// Trim a submitted name, rejecting empty input
pub fn validate_name(raw: &str) -> SyncResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        Err(SyncError::EmptyName)
    } else {
        Ok(name.to_string())
    }
}

pub struct ItemSyncClient<B, V> {
    backend: B,
    view: V,
    items: RefCell<Vec<Item>>,
    /// Item loaded into the form, if any
    selection: RefCell<Option<ItemId>>,
}

impl<B: ItemsBackend, V: ItemView> ItemSyncClient<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            items: RefCell::new(Vec::new()),
            selection: RefCell::new(None),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the local list
    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    pub fn selection(&self) -> Option<ItemId> {
        self.selection.borrow().clone()
    }

    pub fn render(&self) {
        let items = self.items.borrow();
        self.view.render(&items);
    }

    /// Replace the local list with the server's
    pub async fn load(&self) -> SyncResult<()> {
        self.view.show_status(Status::Progress(Operation::Load));
        log::debug!("Fetching items");

        let items = self
            .backend
            .list()
            .await
            .map_err(|err| self.fail(SyncError::from_load(&err), &err))?;

        log::info!("Loaded {} items", items.len());
        *self.items.borrow_mut() = items;
        self.render();
        self.view.show_status(Status::Idle);
        Ok(())
    }

    /// Form submission: update the selected item, or create a new one
    pub async fn submit(&self, name: &str) -> SyncResult<()> {
        match self.selection() {
            Some(id) => self.update(&id, name).await,
            None => self.create(name).await,
        }
    }

    pub async fn create(&self, name: &str) -> SyncResult<()> {
        let name = self.validated(name)?;
        self.view.show_status(Status::Progress(Operation::Create));
        log::debug!("Creating item {:?}", name);

        let created = self
            .backend
            .create(&NewItem::new(name))
            .await
            .map_err(|err| self.fail(SyncError::CreateFailed, &err))?;

        log::info!("Created item {} ({:?})", created.id, created.name);
        self.items.borrow_mut().push(created);
        self.render();
        self.reset_form();
        self.view.show_status(Status::Success(Operation::Create));
        Ok(())
    }

    pub async fn update(&self, id: &ItemId, name: &str) -> SyncResult<()> {
        let name = self.validated(name)?;
        self.view.show_status(Status::Progress(Operation::Update));
        log::debug!("Updating item {} to {:?}", id, name);

        self.backend
            .update(id, &NewItem::new(name.clone()))
            .await
            .map_err(|err| self.fail(SyncError::UpdateFailed, &err))?;

        let found = {
            let mut items = self.items.borrow_mut();
            match items.iter_mut().find(|item| &item.id == id) {
                Some(item) => {
                    item.name = name;
                    true
                }
                None => false,
            }
        };
        if found {
            log::info!("Updated item {}", id);
        } else {
            log::warn!("Item {} was updated on the server but is no longer listed locally", id);
        }

        self.render();
        self.reset_form();
        self.view.show_status(Status::Success(Operation::Update));
        Ok(())
    }

    /// Delete after confirmation. Returns `Ok(false)` if the user declined.
    pub async fn delete(&self, id: &ItemId) -> SyncResult<bool> {
        let item = self.find(id)?;

        let prompt = format!("Are you sure you want to delete \"{}\"?", item.name);
        if !self.view.confirm(&prompt) {
            log::debug!("Delete of item {} cancelled", id);
            return Ok(false);
        }

        self.view.show_status(Status::Progress(Operation::Delete));
        log::debug!("Deleting item {}", id);

        self.backend
            .delete(id)
            .await
            .map_err(|err| self.fail(SyncError::DeleteFailed, &err))?;

        log::info!("Deleted item {}", id);
        self.items.borrow_mut().retain(|item| &item.id != id);
        let was_selected = self.selection.borrow().as_ref() == Some(id);
        if was_selected {
            self.reset_form();
        }
        self.render();
        self.view.show_status(Status::Success(Operation::Delete));
        Ok(true)
    }

    /// Load an item into the form for a subsequent update
    pub fn edit(&self, id: &ItemId) -> SyncResult<()> {
        let item = self.find(id)?;
        *self.selection.borrow_mut() = Some(item.id.clone());
        self.view.fill_form(&item);
        Ok(())
    }

    pub fn cancel_edit(&self) {
        self.reset_form();
    }

    fn find(&self, id: &ItemId) -> SyncResult<Item> {
        let found = self.items.borrow().iter().find(|item| &item.id == id).cloned();
        found.ok_or_else(|| {
            let err = SyncError::UnknownItem(id.clone());
            log::warn!("{}", err);
            self.view.show_status(Status::Error(err.clone()));
            err
        })
    }

    fn validated(&self, name: &str) -> SyncResult<String> {
        validate_name(name).map_err(|err| {
            self.view.show_status(Status::Error(err.clone()));
            err
        })
    }

    fn reset_form(&self) {
        *self.selection.borrow_mut() = None;
        self.view.reset_form();
    }

    fn fail(&self, err: SyncError, cause: &ApiError) -> SyncError {
        log::error!("{} ({})", err, cause);
        self.view.show_status(Status::Error(err.clone()));
        err
    }
}
